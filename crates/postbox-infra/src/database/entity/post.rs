//! Post entity for SeaORM.

use sea_orm::entity::prelude::*;
use sea_orm::{NotSet, Set};

use postbox_core::domain::{NewPost, Post};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "posts")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub author: String,
    #[sea_orm(column_type = "Text")]
    pub text: String,
    #[sea_orm(column_type = "JsonBinary")]
    pub tags: Json,
    pub due: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Conversion from SeaORM Model to Domain Post.
impl From<Model> for Post {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            author: model.author,
            text: model.text,
            // A row whose tags column is not a JSON string array is treated
            // as untagged rather than failing the whole query.
            tags: serde_json::from_value(model.tags).unwrap_or_default(),
            due: model.due,
        }
    }
}

/// Conversion from creation input to SeaORM ActiveModel.
/// The id stays NotSet so the sequence assigns it.
impl From<NewPost> for ActiveModel {
    fn from(new: NewPost) -> Self {
        Self {
            id: NotSet,
            author: Set(new.author),
            text: Set(new.text),
            tags: Set(serde_json::json!(new.tags)),
            due: Set(new.due),
        }
    }
}
