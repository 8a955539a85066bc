//! 统一错误处理模块
//!
//! 使用宏自动生成错误类型，支持错误代码和类型名称。

use std::fmt;

/// 定义错误类型的宏
///
/// 自动生成：
/// - enum 定义
/// - code() 方法 - 返回错误代码
/// - error_type() 方法 - 返回错误类型名称
/// - message() 方法 - 返回错误详情
/// - 便捷构造函数
macro_rules! define_studentsys_errors {
    ($(
        $variant:ident($code:literal, $type_name:literal)
    ),* $(,)?) => {
        #[derive(Debug, Clone)]
        pub enum StudentSysError {
            $($variant(String),)*
        }

        impl StudentSysError {
            /// 获取错误代码
            pub fn code(&self) -> &'static str {
                match self {
                    $(StudentSysError::$variant(_) => $code,)*
                }
            }

            /// 获取错误类型名称
            pub fn error_type(&self) -> &'static str {
                match self {
                    $(StudentSysError::$variant(_) => $type_name,)*
                }
            }

            /// 获取错误详情
            pub fn message(&self) -> &str {
                match self {
                    $(StudentSysError::$variant(msg) => msg,)*
                }
            }
        }

        // 生成便捷构造函数
        paste::paste! {
            impl StudentSysError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        StudentSysError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_studentsys_errors! {
    DatabaseConfig("E001", "Database Configuration Error"),
    DatabaseConnection("E002", "Database Connection Error"),
    DatabaseOperation("E003", "Database Operation Error"),
    UniqueViolation("E004", "Unique Constraint Violation"),
    Validation("E005", "Validation Error"),
    NotFound("E006", "Resource Not Found"),
    Serialization("E007", "Serialization Error"),
}

impl StudentSysError {
    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }

    /// 是否为唯一约束冲突（对应 HTTP 409）
    pub fn is_unique_violation(&self) -> bool {
        matches!(self, StudentSysError::UniqueViolation(_))
    }
}

impl fmt::Display for StudentSysError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for StudentSysError {}

/// 判断数据库报错文案是否为唯一约束冲突
///
/// SQLite、PostgreSQL 和 MySQL 的文案各不相同，这里统一识别。
pub fn message_is_unique_violation(message: &str) -> bool {
    message.contains("UNIQUE constraint failed")
        || message.contains("duplicate key value violates unique constraint")
        || message.contains("Duplicate entry")
}

// 为常见的错误类型实现 From trait
impl From<sea_orm::DbErr> for StudentSysError {
    fn from(err: sea_orm::DbErr) -> Self {
        let msg = err.to_string();
        if message_is_unique_violation(&msg) {
            StudentSysError::UniqueViolation(msg)
        } else {
            StudentSysError::DatabaseOperation(msg)
        }
    }
}

impl From<serde_json::Error> for StudentSysError {
    fn from(err: serde_json::Error) -> Self {
        StudentSysError::Serialization(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, StudentSysError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(StudentSysError::database_config("test").code(), "E001");
        assert_eq!(StudentSysError::unique_violation("test").code(), "E004");
        assert_eq!(StudentSysError::validation("test").code(), "E005");
        assert_eq!(StudentSysError::not_found("test").code(), "E006");
    }

    #[test]
    fn test_error_types() {
        assert_eq!(
            StudentSysError::unique_violation("test").error_type(),
            "Unique Constraint Violation"
        );
        assert_eq!(
            StudentSysError::validation("test").error_type(),
            "Validation Error"
        );
    }

    #[test]
    fn test_format_simple() {
        let err = StudentSysError::validation("name too long");
        let formatted = err.format_simple();
        assert!(formatted.contains("Validation Error"));
        assert!(formatted.contains("name too long"));
    }

    #[test]
    fn test_unique_violation_detection() {
        assert!(message_is_unique_violation(
            "UNIQUE constraint failed: student.email"
        ));
        assert!(message_is_unique_violation(
            "error returned from database: duplicate key value violates unique constraint \"student_email_key\""
        ));
        assert!(message_is_unique_violation(
            "Duplicate entry 'a@b.c' for key 'student.email'"
        ));
        assert!(!message_is_unique_violation("connection refused"));
    }

    #[test]
    fn test_db_err_classification() {
        let dup = sea_orm::DbErr::Custom("UNIQUE constraint failed: student.student_id".into());
        assert!(StudentSysError::from(dup).is_unique_violation());

        let other = sea_orm::DbErr::Custom("database is locked".into());
        assert!(!StudentSysError::from(other).is_unique_violation());
    }
}
