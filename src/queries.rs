//! Named subgraph query documents
//!
//! One document per completion domain. Both take the same variables
//! (`$user`, `$app`) and select the `type_id` of each qualifying record;
//! the tenant scope is mandatory on every query.

/// Completed actions for a user within an app
pub const ACTIONS_BY_USER_AND_APP: &str = r#"
query getActionsByUserAndApp($user: String!, $app: String!) {
  actions(where: { user: $user, app: $app }) {
    id
    type_id
  }
}
"#;

/// Completed missions for a user within an app
pub const MISSIONS_BY_USER_AND_APP: &str = r#"
query getMissionsByUserAndApp($user: String!, $app: String!) {
  missions(where: { user: $user, app: $app }) {
    id
    type_id
  }
}
"#;

/// Field of the response `data` object holding action records
pub const ACTIONS_FIELD: &str = "actions";

/// Field of the response `data` object holding mission records
pub const MISSIONS_FIELD: &str = "missions";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_documents_declare_both_variables() {
        for doc in [ACTIONS_BY_USER_AND_APP, MISSIONS_BY_USER_AND_APP] {
            assert!(doc.contains("$user"));
            assert!(doc.contains("$app"));
        }
    }

    #[test]
    fn test_documents_select_type_id() {
        assert!(ACTIONS_BY_USER_AND_APP.contains("type_id"));
        assert!(MISSIONS_BY_USER_AND_APP.contains("type_id"));
    }
}
