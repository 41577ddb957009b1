#[cfg(test)]
mod tests {
    use crate::schema::{
        BOSTON_METRO_CITIES, COLUMNS, SemanticType, column, numeric_columns,
        qualified_table, render_metro_example, render_schema_block,
    };

    #[test]
    fn test_qualified_table() {
        assert_eq!(
            qualified_table("tpzcollegesearch"),
            "`tpzcollegesearch.most_recent_cohorts_institution.collegedata`"
        );
    }

    #[test]
    fn test_cast_targets() {
        assert_eq!(SemanticType::Float.cast_target(), Some("FLOAT64"));
        assert_eq!(SemanticType::Int.cast_target(), Some("INT64"));
        assert_eq!(SemanticType::Category.cast_target(), Some("INT64"));
        assert_eq!(SemanticType::Text.cast_target(), None);
    }

    #[test]
    fn test_column_lookup() {
        let sat = column("SAT_AVG").unwrap();
        assert_eq!(sat.semantic, SemanticType::Int);

        let name = column("INSTNM").unwrap();
        assert_eq!(name.semantic, SemanticType::Text);

        assert!(column("NOT_A_COLUMN").is_none());
    }

    #[test]
    fn test_category_codes_documented() {
        let control = column("CONTROL").unwrap();
        assert!(control.description.contains("1=Public"));
        assert!(control.description.contains("2=Private"));

        let iclevel = column("ICLEVEL").unwrap();
        assert!(iclevel.description.contains("1=4-year"));
        assert!(iclevel.description.contains("2=2-year"));
    }

    #[test]
    fn test_schema_block_annotates_every_numeric_column() {
        let block = render_schema_block();
        for col in numeric_columns() {
            let target = col.semantic.cast_target().unwrap();
            let expected = format!("- {} (", col.name);
            assert!(block.contains(&expected), "missing column {}", col.name);
            let annotated = format!("SAFE_CAST AS {}", target);
            let line = block
                .lines()
                .find(|l| l.starts_with(&expected))
                .unwrap_or_else(|| panic!("no line for {}", col.name));
            assert!(line.contains(&annotated), "no cast annotation on {}", col.name);
        }
    }

    #[test]
    fn test_schema_block_leaves_text_columns_uncast() {
        let block = render_schema_block();
        let line = block.lines().find(|l| l.starts_with("- INSTNM")).unwrap();
        assert!(!line.contains("SAFE_CAST"));
    }

    #[test]
    fn test_metro_example_enumerates_constituent_cities() {
        let example = render_metro_example();
        assert!(example.starts_with("CITY IN ("));
        for city in BOSTON_METRO_CITIES {
            assert!(example.contains(&format!("'{}'", city)));
        }
    }

    #[test]
    fn test_contract_is_complete() {
        // 原始数据集契约中的全部列都必须出现
        for name in [
            "INSTNM", "CITY", "STABBR", "ADM_RATE", "SAT_AVG", "C150_4", "TUITIONFEE_IN",
            "TUITIONFEE_OUT", "UGDS", "UGDS_WHITE", "UGDS_BLACK", "UGDS_HISP", "UGDS_ASIAN",
            "CONTROL", "ICLEVEL", "MD_EARN_WNE_P10", "PCIP11", "PCIP52", "PCIP51",
        ] {
            assert!(column(name).is_some(), "missing column {}", name);
        }
        assert_eq!(COLUMNS.len(), 19);
    }
}
