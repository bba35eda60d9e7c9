//! Tests for reading and parsing recipient rows

#[cfg(test)]
mod tests {
    use crate::{
        Error, Row,
        ingest::{IngestMode, RecipientParser, read_rows, read_rows_from},
    };
    use num_bigint::BigUint;
    use std::str::FromStr;

    fn row(fields: &[&str]) -> Row {
        fields.iter().map(|f| f.to_string()).collect()
    }

    fn units(text: &str) -> BigUint {
        BigUint::from_str(text).unwrap()
    }

    #[test]
    fn test_per_row_asset_mode() {
        let parser = RecipientParser::new(IngestMode::PerRowAsset);
        let rows = vec![
            row(&["Mx01", "1.5", "3"]),
            row(&["Mx02", "2", "0"]),
        ];

        let recipients = parser.parse(&rows).unwrap();

        assert_eq!(recipients.len(), 2);
        assert_eq!(recipients[0].address, "Mx01");
        assert_eq!(recipients[0].value, units("1500000000000000000"));
        assert_eq!(recipients[0].asset_id, 3);
        assert_eq!(recipients[1].address, "Mx02");
        assert_eq!(recipients[1].value, units("2000000000000000000"));
        assert_eq!(recipients[1].asset_id, 0);
    }

    #[test]
    fn test_fixed_asset_mode_scales_integer() {
        let parser = RecipientParser::new(IngestMode::FixedAsset { asset_id: 0 });

        let recipients = parser.parse(&[row(&["Mx01", "10"])]).unwrap();

        assert_eq!(recipients[0].value, units("10000000000000000000"));
        assert_eq!(recipients[0].asset_id, 0);
    }

    #[test]
    fn test_fixed_value_mode() {
        let parser = RecipientParser::new(IngestMode::FixedValue {
            asset_id: 7,
            value: 100,
        });
        let rows = vec![row(&["Mx01"]), row(&["Mx02"]), row(&["Mx03"])];

        let recipients = parser.parse(&rows).unwrap();

        assert_eq!(recipients.len(), 3);
        for (recipient, address) in recipients.iter().zip(["Mx01", "Mx02", "Mx03"]) {
            assert_eq!(recipient.address, address);
            assert_eq!(recipient.value, units("100000000000000000000"));
            assert_eq!(recipient.asset_id, 7);
        }
    }

    #[test]
    fn test_invalid_amount_aborts_parse() {
        let parser = RecipientParser::new(IngestMode::FixedAsset { asset_id: 0 });
        let rows = vec![row(&["Mx01", "1"]), row(&["Mx02", "abc"]), row(&["Mx03", "1"])];

        match parser.parse(&rows) {
            Err(Error::InvalidAmount { value }) => assert_eq!(value, "abc"),
            other => panic!("expected InvalidAmount, got {other:?}"),
        }
    }

    #[test]
    fn test_negative_amount_rejected() {
        let parser = RecipientParser::new(IngestMode::FixedAsset { asset_id: 0 });

        let result = parser.parse(&[row(&["Mx01", "-5"])]);

        assert!(matches!(result, Err(Error::InvalidAmount { .. })));
    }

    #[test]
    fn test_invalid_asset_id() {
        let parser = RecipientParser::new(IngestMode::PerRowAsset);

        for bad in ["bip", "-1", "1.0", "18446744073709551616"] {
            let result = parser.parse(&[row(&["Mx01", "1", bad])]);
            assert!(
                matches!(result, Err(Error::InvalidAssetId { ref value }) if value == bad),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_arity_mismatch_names_row() {
        let parser = RecipientParser::new(IngestMode::PerRowAsset);
        let rows = vec![row(&["Mx01", "1", "0"]), row(&["Mx02", "1"])];

        match parser.parse(&rows) {
            Err(Error::MalformedRecord { row, .. }) => assert_eq!(row, 2),
            other => panic!("expected MalformedRecord, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_input_parses_to_nothing() {
        let parser = RecipientParser::new(IngestMode::PerRowAsset);
        assert!(parser.parse(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_read_rows_keeps_order_and_fields() {
        let data = "Mx01,1.5,3\nMx02,2,0\n\"Mx03\",7,1\n";

        let rows = read_rows_from(data.as_bytes(), "inline", false).unwrap();

        assert_eq!(
            rows,
            vec![
                row(&["Mx01", "1.5", "3"]),
                row(&["Mx02", "2", "0"]),
                row(&["Mx03", "7", "1"]),
            ]
        );
    }

    #[test]
    fn test_read_rows_skips_header() {
        let data = "address,amount\nMx01,1\n";

        let rows = read_rows_from(data.as_bytes(), "inline", true).unwrap();

        assert_eq!(rows, vec![row(&["Mx01", "1"])]);
    }

    #[test]
    fn test_read_rows_allows_ragged_records() {
        let data = "Mx01,1,0\nMx02,1\n";

        let rows = read_rows_from(data.as_bytes(), "inline", false).unwrap();

        assert_eq!(rows[1].len(), 2);
    }

    #[test]
    fn test_read_rows_rejects_invalid_utf8() {
        let data: &[u8] = b"Mx01,1\nMx02,\xff\xfe\n";

        let result = read_rows_from(data, "inline", false);

        assert!(matches!(result, Err(Error::MalformedRecord { .. })));
    }

    #[test]
    fn test_missing_file_is_unreadable() {
        let result = read_rows("/nonexistent/multisend/recipients.csv", false);

        assert!(matches!(result, Err(Error::FileUnreadable { .. })));
    }
}
