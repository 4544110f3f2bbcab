#[cfg(test)]
mod test {
    use cindex_common::{
        error::Error,
        meta::index::{index_definition::IndexDefinition, index_method::IndexMethod},
    };
    use cindex_connector::build_index_manager;

    use crate::test_runner::test_base::TestBase;

    #[tokio::test]
    async fn create_list_drop_test() {
        let (manager, executor) = TestBase::recording_manager("public");

        let by_customer = IndexDefinition::builder("orders", ["customer_id"]).build();
        let active_status = IndexDefinition::builder("orders", ["status"])
            .unique(true)
            .using(IndexMethod::Hash)
            .where_clause("status != 'archived'")
            .build();
        let reporting = IndexDefinition::builder("orders", ["created_at"])
            .schema("reporting")
            .using(IndexMethod::Btree)
            .build();

        for definition in [&by_customer, &active_status, &reporting] {
            manager.create_index(definition).await.unwrap();
        }

        assert_eq!(
            executor.statements(),
            [
                format!("CREATE INDEX {} ON orders (customer_id)", by_customer.name()),
                format!(
                    "CREATE UNIQUE INDEX {} ON orders USING hash (status) WHERE status != 'archived'",
                    active_status.name()
                ),
                "SELECT current_schema() AS current_schema".to_string(),
                format!(
                    "CREATE INDEX {} ON reporting.orders USING btree (created_at)",
                    reporting.name()
                ),
            ]
        );

        let mut expected_public = vec![
            format!("public.{}", by_customer.name()),
            format!("public.{}", active_status.name()),
        ];
        expected_public.sort();
        assert_eq!(
            manager.fetch_current_indexes(false).await.unwrap(),
            expected_public
        );

        let all = manager.fetch_current_indexes(true).await.unwrap();
        assert_eq!(all.len(), 3);
        assert!(all.contains(&format!("reporting.{}", reporting.name())));

        for index_name in all {
            manager.drop_index(&index_name).await.unwrap();
        }
        assert!(manager.fetch_current_indexes(true).await.unwrap().is_empty());
        assert_eq!(executor.count_statements("DROP INDEX"), 3);
    }

    #[tokio::test]
    async fn independent_definitions_agree_on_name_test() {
        let (manager, executor) = TestBase::recording_manager("public");

        let first = IndexDefinition::builder("orders", ["customer_id", "created_at"]).build();
        manager.create_index(&first).await.unwrap();

        // a second process describing the same index collides with the first
        let second = IndexDefinition::builder("orders", ["customer_id", "created_at"]).build();
        assert_eq!(first.name(), second.name());
        let err = manager.create_index(&second).await.unwrap_err();
        assert!(err.to_string().contains("already exists"));

        // reordered columns are a different index
        let reordered = IndexDefinition::builder("orders", ["created_at", "customer_id"]).build();
        assert_ne!(first.name(), reordered.name());
        manager.create_index(&reordered).await.unwrap();

        assert_eq!(executor.count_statements("CREATE INDEX"), 3);
        assert_eq!(manager.fetch_current_indexes(false).await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn invalid_definition_is_not_submitted_test() {
        let (manager, executor) = TestBase::recording_manager("public");

        let definition = IndexDefinition::builder("o".repeat(64), Vec::<String>::new())
            .using("brin")
            .build();
        let err = manager.create_index(&definition).await.unwrap_err();
        match err.downcast_ref::<Error>() {
            Some(Error::ValidationFailure(errors)) => {
                assert!(errors.has_field("table_name"));
                assert!(errors.has_field("using"));
                assert!(errors.has_field("columns"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
        assert!(executor.statements().is_empty());
    }

    #[tokio::test]
    async fn unsupported_db_type_in_config_test() {
        let config_file = TestBase::write_task_config(
            "cindex_unsupported_db_type.ini",
            "[connection]\ndb_type=sqlserver\nurl=mssql://sa@127.0.0.1:1433/app\n",
        );
        let err = build_index_manager(&config_file, false).await.err().unwrap();
        match err.downcast_ref::<Error>() {
            Some(Error::UnsupportedPlatform(p)) => assert_eq!(p, "sqlserver"),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn missing_config_file_test() {
        let err = build_index_manager("./no_such_dir/task_config.ini", false)
            .await
            .err()
            .unwrap();
        assert!(matches!(err.downcast_ref::<Error>(), Some(Error::IoError(_))));
    }
}
