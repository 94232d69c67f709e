//! Unit tests for error handling

use super::*;

#[cfg(test)]
mod scout_error_tests {
    use super::*;

    #[tokio::test]
    async fn test_http_error_conversion() {
        // Nothing listens on port 1, so the connect fails immediately
        let client = reqwest::Client::new();
        let result = client.get("http://127.0.0.1:1/players").send().await;
        let reqwest_error = result.unwrap_err();
        let scout_error = ScoutError::from(reqwest_error);

        match scout_error {
            ScoutError::Http(_) => (),
            _ => panic!("Expected Http error variant"),
        }
    }

    #[test]
    fn test_json_error_conversion() {
        let json_error = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let scout_error = ScoutError::from(json_error);

        match scout_error {
            ScoutError::Json(_) => (),
            _ => panic!("Expected Json error variant"),
        }
    }

    #[test]
    fn test_validation_error_conversion() {
        let validation = ValidationError::new("items[0].age", "positive integer");
        let scout_error = ScoutError::from(validation);

        let error_string = scout_error.to_string();
        assert!(error_string.contains("items[0].age"));
        assert!(error_string.contains("positive integer"));
    }

    #[test]
    fn test_parse_int_error_conversion() {
        let parse_error = "twenty".parse::<u16>().unwrap_err();
        let scout_error = ScoutError::from(parse_error);

        match scout_error {
            ScoutError::InvalidNumber(_) => (),
            _ => panic!("Expected InvalidNumber error variant"),
        }
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "stdout closed");
        let scout_error = ScoutError::from(io_error);

        match &scout_error {
            ScoutError::Io(_) => (),
            _ => panic!("Expected Io error variant"),
        }
        assert!(scout_error.to_string().contains("stdout closed"));
    }

    #[test]
    fn test_status_error_message() {
        let error = ScoutError::Status {
            status: 500,
            url: "http://localhost:8000/players".to_string(),
        };

        let error_string = error.to_string();
        assert!(error_string.contains("500"));
        assert!(error_string.contains("/players"));
    }

    #[test]
    fn test_is_not_found() {
        assert!(ScoutError::NotFound {
            resource: "player abc".to_string()
        }
        .is_not_found());
        assert!(ScoutError::Status {
            status: 404,
            url: "x".to_string()
        }
        .is_not_found());
        assert!(!ScoutError::Status {
            status: 503,
            url: "x".to_string()
        }
        .is_not_found());
    }

    #[test]
    fn test_clone_keeps_message() {
        let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let original = ScoutError::from(json_error);
        let cloned = original.clone();

        assert_eq!(original.to_string(), cloned.to_string());
    }

    #[test]
    fn test_error_source_chain() {
        let json_error = serde_json::from_str::<serde_json::Value>("[1,").unwrap_err();
        let scout_error = ScoutError::from(json_error);

        let error_trait: &dyn std::error::Error = &scout_error;
        assert!(error_trait.source().is_some());
    }

    #[test]
    fn test_result_type_alias_error() {
        fn lookup() -> Result<String> {
            Err(ScoutError::NotFound {
                resource: "player".to_string(),
            })
        }

        match lookup().unwrap_err() {
            ScoutError::NotFound { resource } => assert_eq!(resource, "player"),
            _ => panic!("Expected NotFound error"),
        }
    }
}
