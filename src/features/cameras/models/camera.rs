use sqlx::FromRow;

/// Database model for a camera row
#[derive(Debug, Clone, FromRow)]
pub struct Camera {
    pub id: i32,
    pub name: String,
    pub location: String,
}
