#[cfg(test)]
mod tests {
    use crate::error::RoutingError;
    use crate::types::{ResultSet, Role, RoutingDecision, Turn};
    use std::collections::HashMap;

    #[test]
    fn test_parse_chat_decision() {
        let decision = RoutingDecision::parse("CHAT: Physics is great! Any city in mind?").unwrap();
        assert_eq!(
            decision,
            RoutingDecision::Chat {
                reply: "Physics is great! Any city in mind?".to_string()
            }
        );
    }

    #[test]
    fn test_parse_search_decision() {
        let decision = RoutingDecision::parse("SEARCH: Nursing schools in Boston").unwrap();
        assert_eq!(
            decision,
            RoutingDecision::Search {
                intent: "Nursing schools in Boston".to_string()
            }
        );
    }

    #[test]
    fn test_parse_trims_surrounding_whitespace() {
        let decision = RoutingDecision::parse("\n  SEARCH:   Affordable nursing schools \n").unwrap();
        assert_eq!(
            decision,
            RoutingDecision::Search {
                intent: "Affordable nursing schools".to_string()
            }
        );
    }

    #[test]
    fn test_parse_rejects_unprefixed_output() {
        let raw = "I think you should search for nursing schools.";
        let err = RoutingDecision::parse(raw).unwrap_err();
        match err {
            RoutingError::UnrecognizedDecision { raw: got } => assert_eq!(got, raw),
        }
    }

    #[test]
    fn test_parse_rejects_empty_output() {
        assert!(RoutingDecision::parse("").is_err());
        assert!(RoutingDecision::parse("   \n  ").is_err());
    }

    #[test]
    fn test_turn_carries_role_icon() {
        let turn = Turn::new(Role::Assistant, "Hoot!");
        assert_eq!(turn.icon, "🦉");
        assert_eq!(turn.role, Role::Assistant);

        let turn = Turn::new(Role::User, "hello");
        assert_eq!(turn.icon, "👤");
    }

    #[test]
    fn test_role_display() {
        assert_eq!(Role::User.to_string(), "user");
        assert_eq!(Role::Assistant.to_string(), "assistant");
    }

    #[test]
    fn test_result_set_value_lookup() {
        let mut set = ResultSet::new(vec!["INSTNM".to_string(), "CITY".to_string()]);
        let mut row: HashMap<String, Option<String>> = HashMap::new();
        row.insert("INSTNM".to_string(), Some("Northeastern University".to_string()));
        row.insert("CITY".to_string(), None);
        set.rows.push(row);

        assert_eq!(set.len(), 1);
        assert!(!set.is_empty());
        assert_eq!(set.value(0, "INSTNM"), Some("Northeastern University"));
        assert_eq!(set.value(0, "CITY"), None);
        assert_eq!(set.value(0, "STABBR"), None);
        assert_eq!(set.value(3, "INSTNM"), None);
    }

    #[test]
    fn test_empty_result_set_is_distinct_state() {
        let set = ResultSet::new(vec!["INSTNM".to_string()]);
        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
    }
}
