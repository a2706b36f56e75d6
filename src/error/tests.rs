//! Unit tests for error handling

use super::*;
use std::io;

#[cfg(test)]
mod league_error_tests {
    use super::*;

    #[test]
    fn test_database_error_conversion() {
        let league_error = LeagueError::from(rusqlite::Error::QueryReturnedNoRows);

        match league_error {
            LeagueError::Database(_) => (),
            _ => panic!("Expected Database error variant"),
        }
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let league_error = LeagueError::from(io_error);

        match league_error {
            LeagueError::Io(_) => (),
            _ => panic!("Expected Io error variant"),
        }
    }

    #[test]
    fn test_parse_int_error_conversion() {
        let parse_error = "not_a_number".parse::<i64>().unwrap_err();
        let league_error = LeagueError::from(parse_error);

        match league_error {
            LeagueError::InvalidId(_) => (),
            _ => panic!("Expected InvalidId error variant"),
        }
    }

    #[test]
    fn test_addr_parse_error_conversion() {
        let addr_error = "not an address".parse::<std::net::SocketAddr>().unwrap_err();
        let league_error = LeagueError::from(addr_error);

        match league_error {
            LeagueError::InvalidAddr(_) => (),
            _ => panic!("Expected InvalidAddr error variant"),
        }
    }

    #[tokio::test]
    async fn test_join_error_is_server_side() {
        let join_error = tokio::task::spawn_blocking(|| panic!("accessor panicked"))
            .await
            .unwrap_err();
        let league_error = LeagueError::from(join_error);

        assert!(matches!(league_error, LeagueError::Task(_)));
        assert!(!league_error.is_client_error());
    }

    #[test]
    fn test_not_found_message_names_reference() {
        let error = LeagueError::NotFound {
            reference: Reference::HomeTeam,
            id: 9999,
        };

        assert_eq!(error.to_string(), "The home team with id 9999 does not exist");
    }

    #[test]
    fn test_missing_data_dir_error() {
        let error = LeagueError::MissingDataDir {
            env_var: "SUPERLIGA_DB_PATH".to_string(),
        };

        assert!(error.to_string().contains("SUPERLIGA_DB_PATH"));
    }

    #[test]
    fn test_client_error_classification() {
        assert!(LeagueError::Validation(ValidationError::Empty { field: "nombre" }).is_client_error());
        assert!(LeagueError::NotFound {
            reference: Reference::Player,
            id: 1
        }
        .is_client_error());
        assert!(!LeagueError::LockPoisoned.is_client_error());
        assert!(!LeagueError::Database(rusqlite::Error::InvalidQuery).is_client_error());
    }
}

#[cfg(test)]
mod validation_error_tests {
    use super::*;

    #[test]
    fn test_validation_messages() {
        assert_eq!(
            ValidationError::Missing { field: "nombre" }.to_string(),
            "nombre is required"
        );
        assert_eq!(
            ValidationError::Empty { field: "ciudad" }.to_string(),
            "ciudad cannot be empty"
        );
        assert_eq!(
            ValidationError::TooLong {
                field: "apellido",
                max: 50
            }
            .to_string(),
            "apellido exceeds maximum length of 50 characters"
        );
    }

    #[test]
    fn test_validation_wraps_into_league_error() {
        let error: LeagueError = ValidationError::Missing { field: "entrenador" }.into();
        assert_eq!(error.to_string(), "Validation failed: entrenador is required");
    }
}
