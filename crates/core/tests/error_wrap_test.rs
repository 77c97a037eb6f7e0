use geoddl_core::{Error, GenerateError, Result, StatementError};

#[test]
fn top_level_error_wraps_stage_errors_with_from() {
    let statement = StatementError::EmptyColumns {
        index: "idx_geom".to_string(),
        table: "roads".to_string(),
    };
    let generate = GenerateError::UnsupportedDialect {
        dialect: "sqlite".to_string(),
        index: "idx_geom".to_string(),
        table: "roads".to_string(),
    };

    let wrapped_statement: Error = statement.clone().into();
    let wrapped_generate: Error = generate.clone().into();

    assert!(matches!(wrapped_statement, Error::Statement(_)));
    assert!(matches!(wrapped_generate, Error::Generate(_)));
    assert_eq!(wrapped_statement.to_string(), statement.to_string());
    assert_eq!(wrapped_generate.to_string(), generate.to_string());
}

#[test]
fn result_alias_uses_top_level_error() {
    fn fail() -> Result<()> {
        Err(StatementError::MissingTolerance {
            index: "idx_geom".to_string(),
            table: "roads".to_string(),
        }
        .into())
    }

    let err = fail().expect_err("must return top-level error");
    assert!(matches!(err, Error::Statement(_)));
}

#[test]
fn partial_z_message_names_both_bounds() {
    let error = StatementError::PartialZBounds {
        index: "idx_geom".to_string(),
        table: "roads".to_string(),
        present: "min_z",
        missing: "max_z",
    };

    let message = error.to_string();
    assert!(message.contains("min_z"));
    assert!(message.contains("max_z"));
    assert!(message.contains("`roads`"));
}
