use crate::error::AppError;
use crate::models::User;
use sqlx::SqliteConnection;

pub async fn insert_user(conn: &mut SqliteConnection, user: &User) -> Result<(), AppError> {
    sqlx::query(
        r#"
        INSERT INTO User (Id, FirstName, LastName, DateOfBirth, AccountId, Username, Password)
        VALUES (?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(user.id)
    .bind(&user.first_name)
    .bind(&user.last_name)
    .bind(user.date_of_birth.format("%Y-%m-%d").to_string())
    .bind(user.account_id)
    .bind(&user.username)
    .bind(&user.password)
    .execute(&mut *conn)
    .await?;

    Ok(())
}
