//! Parameter group to database association

use crate::groups::ParameterGroup;
use serde::Serialize;
use std::collections::BTreeMap;

/// Marker shown for a parameter group no database uses
pub const NOT_USED: &str = "<not-used>";

/// A DB instance or DB cluster and the parameter group it is attached to
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Database {
    pub identifier: String,
    pub parameter_group: String,
}

/// One row of the mapping table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MappingRow {
    pub parameter_group: String,
    pub databases: String,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum MappingError {
    #[error("database {database} references unknown parameter group {parameter_group}")]
    UnknownParameterGroup {
        database: String,
        parameter_group: String,
    },
}

/// Associate every parameter group with the databases using it
///
/// Rows are sorted by parameter group name. Database identifiers keep their
/// input order and are joined with `,`; unused groups show [`NOT_USED`].
/// A database pointing at a group outside `groups` means the two listings are
/// inconsistent and is reported as an error.
pub fn generate_mapping(
    groups: &[ParameterGroup],
    databases: &[Database],
) -> Result<Vec<MappingRow>, MappingError> {
    let mut mapping: BTreeMap<&str, Vec<&str>> = groups
        .iter()
        .map(|group| (group.name.as_str(), Vec::new()))
        .collect();

    for database in databases {
        mapping
            .get_mut(database.parameter_group.as_str())
            .ok_or_else(|| MappingError::UnknownParameterGroup {
                database: database.identifier.clone(),
                parameter_group: database.parameter_group.clone(),
            })?
            .push(database.identifier.as_str());
    }

    Ok(mapping
        .into_iter()
        .map(|(name, dbs)| MappingRow {
            parameter_group: name.to_string(),
            databases: if dbs.is_empty() {
                NOT_USED.to_string()
            } else {
                dbs.join(",")
            },
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn groups(names: &[&str]) -> Vec<ParameterGroup> {
        names
            .iter()
            .map(|name| ParameterGroup {
                name: name.to_string(),
                ..Default::default()
            })
            .collect()
    }

    fn db(identifier: &str, parameter_group: &str) -> Database {
        Database {
            identifier: identifier.to_string(),
            parameter_group: parameter_group.to_string(),
        }
    }

    fn row(parameter_group: &str, databases: &str) -> MappingRow {
        MappingRow {
            parameter_group: parameter_group.to_string(),
            databases: databases.to_string(),
        }
    }

    #[test]
    fn test_mapping_used_and_unused_groups() {
        let rows = generate_mapping(&groups(&["pg1", "pg2"]), &[db("db1", "pg1")]).unwrap();

        assert_eq!(rows, vec![row("pg1", "db1"), row("pg2", "<not-used>")]);
    }

    #[test]
    fn test_mapping_unknown_group_is_an_error() {
        let result = generate_mapping(&groups(&["pg1"]), &[db("db1", "pg-missing")]);

        assert_eq!(
            result,
            Err(MappingError::UnknownParameterGroup {
                database: "db1".to_string(),
                parameter_group: "pg-missing".to_string(),
            })
        );
    }

    #[test]
    fn test_mapping_sorted_and_joined() {
        let rows = generate_mapping(
            &groups(&["zeta", "alpha", "mid"]),
            &[db("db-b", "mid"), db("db-a", "mid"), db("db-c", "alpha")],
        )
        .unwrap();

        assert_eq!(
            rows,
            vec![
                row("alpha", "db-c"),
                row("mid", "db-b,db-a"),
                row("zeta", "<not-used>"),
            ]
        );
    }

    #[test]
    fn test_mapping_covers_every_group_and_database() {
        let pgs = groups(&["c", "a", "b", "d"]);
        let dbs = vec![db("1", "a"), db("2", "a"), db("3", "c"), db("4", "d")];

        let rows = generate_mapping(&pgs, &dbs).unwrap();

        assert_eq!(rows.len(), pgs.len());

        let names: Vec<&str> = rows.iter().map(|r| r.parameter_group.as_str()).collect();
        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);

        let listed: HashSet<&str> = rows
            .iter()
            .filter(|r| r.databases != NOT_USED)
            .flat_map(|r| r.databases.split(','))
            .collect();
        let expected: HashSet<&str> = dbs.iter().map(|d| d.identifier.as_str()).collect();
        assert_eq!(listed, expected);
    }

    #[test]
    fn test_mapping_no_groups_no_databases() {
        assert!(generate_mapping(&[], &[]).unwrap().is_empty());
    }

    #[test]
    fn test_mapping_error_message() {
        let err = generate_mapping(&[], &[db("db1", "pg-missing")]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "database db1 references unknown parameter group pg-missing"
        );
    }
}
