//! Theme data repository.

use sea_orm::sea_query::{Expr, ExprTrait, Func};
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
};
use uuid::Uuid;

/// Repository providing database operations for themes.
pub struct ThemeRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ThemeRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<entity::theme::Model>, DbErr> {
        entity::prelude::Theme::find_by_id(id).one(self.db).await
    }

    /// Gets all themes ordered alphabetically by name.
    pub async fn get_all(&self) -> Result<Vec<entity::theme::Model>, DbErr> {
        entity::prelude::Theme::find()
            .order_by_asc(entity::theme::Column::Name)
            .all(self.db)
            .await
    }

    /// Gets themes whose name contains the given fragment, case-insensitive.
    pub async fn find_by_name_contains(
        &self,
        name: &str,
    ) -> Result<Vec<entity::theme::Model>, DbErr> {
        entity::prelude::Theme::find()
            .filter(
                Expr::expr(Func::lower(Expr::col(entity::theme::Column::Name)))
                    .like(format!("%{}%", name.to_lowercase())),
            )
            .order_by_asc(entity::theme::Column::Name)
            .all(self.db)
            .await
    }

    /// Sets or clears the stored theme photo path.
    pub async fn set_photo(&self, theme_id: Uuid, photo_path: Option<String>) -> Result<(), DbErr> {
        entity::prelude::Theme::update_many()
            .filter(entity::theme::Column::Id.eq(theme_id))
            .col_expr(
                entity::theme::Column::ThemePhoto,
                Expr::value(photo_path),
            )
            .exec(self.db)
            .await?;
        Ok(())
    }
}
