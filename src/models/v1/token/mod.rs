use sea_orm::prelude::*;

use crate::entities::v1::tokens::{Entity, Model};
use crate::entities::v1::users;

impl Model {
    /// Token by id together with the user it belongs to
    pub async fn find_with_user(
        db: &DatabaseConnection,
        id: Uuid,
    ) -> Result<Option<(Self, users::Model)>, DbErr> {
        let found = Entity::find_by_id(id)
            .find_also_related(users::Entity)
            .one(db)
            .await?;

        Ok(found.and_then(|(token, user)| user.map(|user| (token, user))))
    }

    pub fn is_expired(&self, now: DateTime) -> bool {
        matches!(self.expired_at, Some(expired_at) if expired_at <= now)
    }
}
