//! SeaORM 存储实现
//!
//! 统一的数据库存储层，支持 SQLite、PostgreSQL 和 MySQL。

mod students;

use crate::config::AppConfig;
use crate::errors::{Result, StudentSysError, message_is_unique_violation};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::time::Duration;
use tracing::info;

/// SeaORM 存储实现
#[derive(Clone)]
pub struct SeaOrmStorage {
    pub(crate) db: DatabaseConnection,
}

impl SeaOrmStorage {
    /// 创建新的 SeaORM 存储实例
    pub async fn new_async() -> Result<Self> {
        let config = AppConfig::get();
        let db_url = Self::build_database_url(&config.database.url)?;

        // 根据数据库类型选择连接方式
        let db = if db_url.starts_with("sqlite://") {
            Self::connect_sqlite(&db_url, config).await?
        } else {
            Self::connect_generic(&db_url, config).await?
        };

        // 运行迁移
        Migrator::up(&db, None)
            .await
            .map_err(|e| StudentSysError::database_operation(format!("数据库迁移失败: {e}")))?;

        info!("SeaORM 存储初始化完成，数据库: {}", db_url);

        Ok(Self { db })
    }

    /// SQLite 专用连接（WAL + pragma 优化）
    async fn connect_sqlite(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{
            SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
        };
        use std::str::FromStr;

        let opt = SqliteConnectOptions::from_str(url)
            .map_err(|e| StudentSysError::database_config(format!("SQLite URL 解析失败: {e}")))?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(Duration::from_secs(5))
            .pragma("cache_size", "-64000")
            .pragma("temp_store", "memory");

        let pool = SqlitePoolOptions::new()
            .max_connections(config.database.pool_size)
            .min_connections(1)
            .test_before_acquire(true)
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(300))
            .connect_with(opt)
            .await
            .map_err(|e| StudentSysError::database_connection(format!("SQLite 连接失败: {e}")))?;

        Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
    }

    /// 通用连接（PostgreSQL、MySQL 等）
    async fn connect_generic(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(url);
        opt.max_connections(config.database.pool_size)
            .min_connections(1)
            .connect_timeout(Duration::from_secs(config.database.timeout))
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .sqlx_logging(false)
            .sqlx_logging_level(tracing::log::LevelFilter::Debug);

        Database::connect(opt)
            .await
            .map_err(|e| StudentSysError::database_connection(format!("无法连接到数据库: {e}")))
    }

    /// 从 URL 自动推断数据库类型并构建连接 URL
    fn build_database_url(url: &str) -> Result<String> {
        if url.starts_with("sqlite://") {
            Ok(url.to_string())
        } else if url.ends_with(".db") || url.ends_with(".sqlite") || url == ":memory:" {
            Ok(format!("sqlite://{}?mode=rwc", url))
        } else if url.starts_with("postgres://")
            || url.starts_with("postgresql://")
            || url.starts_with("mysql://")
            || url.starts_with("mariadb://")
        {
            Ok(url.to_string())
        } else {
            Err(StudentSysError::database_config(format!(
                "无法从 URL 推断数据库类型: {url}. 支持: sqlite://, postgres://, mysql://, 或 .db/.sqlite 文件路径"
            )))
        }
    }
}

/// 写入失败归类：唯一约束冲突与其它数据库错误走不同的错误变体
pub(crate) fn classify_write_err(context: &str, err: sea_orm::DbErr) -> StudentSysError {
    let msg = err.to_string();
    if message_is_unique_violation(&msg) {
        StudentSysError::unique_violation(msg)
    } else {
        StudentSysError::database_operation(format!("{context}: {msg}"))
    }
}

// Storage trait 实现
use crate::models::students::{
    entities::Student,
    requests::{CreateStudentRequest, UpdateStudentRequest},
};
use crate::storage::{Storage, StudentPage};
use async_trait::async_trait;
use uuid::Uuid;

#[async_trait]
impl Storage for SeaOrmStorage {
    async fn create_student(&self, student: CreateStudentRequest) -> Result<Student> {
        self.create_student_impl(student).await
    }

    async fn get_student_by_id(&self, id: Uuid) -> Result<Option<Student>> {
        self.get_student_by_id_impl(id).await
    }

    async fn get_student_by_student_id(&self, student_id: &str) -> Result<Option<Student>> {
        self.get_student_by_student_id_impl(student_id).await
    }

    async fn get_student_by_email(&self, email: &str) -> Result<Option<Student>> {
        self.get_student_by_email_impl(email).await
    }

    async fn list_students_with_pagination(
        &self,
        offset: u64,
        limit: u64,
    ) -> Result<StudentPage> {
        self.list_students_with_pagination_impl(offset, limit).await
    }

    async fn update_student(
        &self,
        id: Uuid,
        update: UpdateStudentRequest,
    ) -> Result<Option<Student>> {
        self.update_student_impl(id, update).await
    }

    async fn delete_student(&self, id: Uuid) -> Result<bool> {
        self.delete_student_impl(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::Database;

    fn student_request(number: &str, email: &str) -> CreateStudentRequest {
        CreateStudentRequest {
            name: "Ada Lovelace".to_string(),
            student_id: number.to_string(),
            id_semester: "2025-1".to_string(),
            email: email.to_string(),
            department: serde_json::json!({"faculty": "engineering"}),
        }
    }

    // 每个测试使用独立的临时 SQLite 文件，TempDir 负责清理
    async fn temp_storage() -> (tempfile::TempDir, SeaOrmStorage) {
        let dir = tempfile::tempdir().expect("create temp dir");
        let url = format!(
            "sqlite://{}?mode=rwc",
            dir.path().join("students.db").display()
        );
        let db = Database::connect(url).await.expect("connect test database");
        Migrator::up(&db, None).await.expect("run migrations");
        (dir, SeaOrmStorage { db })
    }

    #[tokio::test]
    async fn test_duplicate_email_rejected() {
        let (_dir, storage) = temp_storage().await;

        storage
            .create_student_impl(student_request("S001", "ada@example.com"))
            .await
            .expect("first create succeeds");

        // 相同邮箱的第二次创建必须被唯一索引拒绝
        let err = storage
            .create_student_impl(student_request("S002", "ada@example.com"))
            .await
            .expect_err("second create with same email fails");
        assert!(err.is_unique_violation());

        // 更新引入的重复邮箱同样被拒绝
        let other = storage
            .create_student_impl(student_request("S003", "grace@example.com"))
            .await
            .expect("create with distinct email succeeds");
        let err = storage
            .update_student_impl(
                other.id,
                UpdateStudentRequest {
                    name: None,
                    student_id: None,
                    id_semester: None,
                    email: Some("ada@example.com".to_string()),
                    department: None,
                },
            )
            .await
            .expect_err("update to a taken email fails");
        assert!(err.is_unique_violation());
    }

    #[tokio::test]
    async fn test_partial_update_preserves_untouched_fields() {
        let (_dir, storage) = temp_storage().await;

        let created = storage
            .create_student_impl(student_request("S001", "ada@example.com"))
            .await
            .expect("create succeeds");

        let updated = storage
            .update_student_impl(
                created.id,
                UpdateStudentRequest {
                    name: Some("X".to_string()),
                    student_id: None,
                    id_semester: None,
                    email: None,
                    department: None,
                },
            )
            .await
            .expect("update succeeds")
            .expect("student exists");

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.name, "X");
        assert_eq!(updated.student_id, created.student_id);
        assert_eq!(updated.id_semester, created.id_semester);
        assert_eq!(updated.email, created.email);
        assert_eq!(updated.department, created.department);
        assert!(updated.updated_at >= created.updated_at);
    }

    #[tokio::test]
    async fn test_delete_twice_true_then_false() {
        let (_dir, storage) = temp_storage().await;

        let created = storage
            .create_student_impl(student_request("S001", "ada@example.com"))
            .await
            .expect("create succeeds");

        assert!(storage.delete_student_impl(created.id).await.expect("first delete"));
        assert!(!storage.delete_student_impl(created.id).await.expect("second delete"));
    }

    #[test]
    fn test_build_database_url_inference() {
        assert_eq!(
            SeaOrmStorage::build_database_url("students.db").unwrap(),
            "sqlite://students.db?mode=rwc"
        );
        assert_eq!(
            SeaOrmStorage::build_database_url(":memory:").unwrap(),
            "sqlite://:memory:?mode=rwc"
        );
        assert_eq!(
            SeaOrmStorage::build_database_url("postgres://u:p@localhost/students").unwrap(),
            "postgres://u:p@localhost/students"
        );
        assert!(SeaOrmStorage::build_database_url("ftp://nope").is_err());
    }

    #[test]
    fn test_classify_write_err() {
        let dup = sea_orm::DbErr::Custom("UNIQUE constraint failed: student.email".into());
        assert!(classify_write_err("创建学生失败", dup).is_unique_violation());

        let other = sea_orm::DbErr::Custom("disk I/O error".into());
        let classified = classify_write_err("创建学生失败", other);
        assert!(!classified.is_unique_violation());
        assert!(classified.message().contains("创建学生失败"));
    }
}
