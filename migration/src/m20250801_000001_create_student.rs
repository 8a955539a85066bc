use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 创建学生表
        manager
            .create_table(
                Table::create()
                    .table(Student::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Student::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Student::Name).string_len(50).not_null())
                    .col(
                        ColumnDef::new(Student::StudentId)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Student::IdSemester).string().not_null())
                    .col(
                        ColumnDef::new(Student::Email)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Student::Department).json().not_null())
                    .col(ColumnDef::new(Student::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Student::UpdatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Student::CreatedBy).string().null())
                    .col(ColumnDef::new(Student::UpdatedBy).string().null())
                    .to_owned(),
            )
            .await?;

        // 姓名列表查询用索引
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_student_name")
                    .table(Student::Table)
                    .col(Student::Name)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Student::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Student {
    #[sea_orm(iden = "student")]
    Table,
    Id,
    Name,
    StudentId,
    IdSemester,
    Email,
    Department,
    CreatedAt,
    UpdatedAt,
    CreatedBy,
    UpdatedBy,
}
