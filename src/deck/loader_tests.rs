#[cfg(test)]
mod tests {
    use crate::{
        core::KarteiError,
        deck::loader::parse_records,
    };

    #[test]
    fn parses_well_formed_rows_in_order() {
        let text = "unit,german,spanish\n\
                    1,der Hund,el perro\n\
                    1,die Katze,el gato\n\
                    2,rot,rojo\n";

        let records = parse_records(text).expect("valid deck");

        assert_eq!(records.len(), 3);
        assert_eq!(records[0].unit, "1");
        assert_eq!(records[0].source, "der Hund");
        assert_eq!(records[0].target, "el perro");
        assert_eq!(records[2].source, "rot");
        assert!(records[0].grade.is_none());
    }

    #[test]
    fn accepts_generic_header_aliases() {
        let text = "unit,source,target,grade\n1,water,agua,7\n";

        let records = parse_records(text).expect("valid deck");

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].target, "agua");
        assert_eq!(records[0].grade.as_deref(), Some("7"));
    }

    #[test]
    fn header_matching_ignores_case_and_bom() {
        let text = "\u{feff}Unit,GERMAN,Spanish\n1,ja,sí\n";

        let records = parse_records(text).expect("valid deck");

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].source, "ja");
    }

    #[test]
    fn quoted_fields_keep_embedded_delimiters_and_quotes() {
        let text = "unit,german,spanish\n\
                    1,\"essen, trinken\",\"comer, beber\"\n\
                    1,\"das \"\"Haus\"\"\",la casa\n";

        let records = parse_records(text).expect("valid deck");

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].source, "essen, trinken");
        assert_eq!(records[0].target, "comer, beber");
        assert_eq!(records[1].source, "das \"Haus\"");
    }

    #[test]
    fn tolerates_crlf_and_blank_trailing_lines() {
        let text = "unit,german,spanish\r\n1,gut,bueno\r\n\r\n2,alt,viejo\r\n\r\n";

        let records = parse_records(text).expect("valid deck");

        assert_eq!(records.len(), 2);
        assert_eq!(records[1].source, "alt");
    }

    #[test]
    fn drops_rows_missing_a_required_field() {
        let text = "unit,german,spanish\n\
                    1,gut,bueno\n\
                    1,kaputt\n\
                    ,neu,nuevo\n\
                    1,  ,vacío\n\
                    2,alt,viejo\n";

        let records = parse_records(text).expect("valid deck");

        let sources: Vec<&str> = records.iter().map(|r| r.source.as_str()).collect();
        assert_eq!(sources, vec!["gut", "alt"]);
    }

    #[test]
    fn missing_required_header_is_an_error() {
        let text = "unit,german\n1,gut\n";

        match parse_records(text) {
            Err(KarteiError::MissingColumn(column)) => assert_eq!(column, "spanish/target"),
            other => panic!("expected MissingColumn, got {:?}", other.map(|r| r.len())),
        }
    }

    #[test]
    fn empty_input_is_a_missing_header() {
        assert!(matches!(parse_records(""), Err(KarteiError::MissingColumn("unit"))));
    }

    #[test]
    fn values_are_trimmed() {
        let text = "unit,german,spanish\n 1 ,  gut  , bueno \n";

        let records = parse_records(text).expect("valid deck");

        assert_eq!(records[0].unit, "1");
        assert_eq!(records[0].source, "gut");
        assert_eq!(records[0].target, "bueno");
    }
}
