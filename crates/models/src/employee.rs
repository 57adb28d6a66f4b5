use sea_orm::{entity::prelude::*, ActiveModelTrait, DatabaseConnection, NotSet, QueryFilter, QueryOrder, Set};
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "employee")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub first_name: String,
    pub second_name: String,
    #[sea_orm(unique)]
    pub email: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Insert a new row; the database assigns the id.
pub async fn insert(db: &DatabaseConnection, first_name: &str, second_name: &str, email: &str) -> Result<Model, ModelError> {
    let am = ActiveModel {
        id: NotSet,
        first_name: Set(first_name.to_string()),
        second_name: Set(second_name.to_string()),
        email: Set(email.to_string()),
    };
    Ok(am.insert(db).await?)
}

/// Replace every column of the row with `id`. Fails with `NotFound` when no such row exists.
pub async fn overwrite(db: &DatabaseConnection, id: i64, first_name: &str, second_name: &str, email: &str) -> Result<Model, ModelError> {
    let am = ActiveModel {
        id: Set(id),
        first_name: Set(first_name.to_string()),
        second_name: Set(second_name.to_string()),
        email: Set(email.to_string()),
    };
    Ok(am.update(db).await?)
}

/// All rows in primary-key order.
pub async fn find_all(db: &DatabaseConnection) -> Result<Vec<Model>, ModelError> {
    Ok(Entity::find().order_by_asc(Column::Id).all(db).await?)
}

pub async fn find_by_id(db: &DatabaseConnection, id: i64) -> Result<Option<Model>, ModelError> {
    Ok(Entity::find_by_id(id).one(db).await?)
}

pub async fn find_by_email(db: &DatabaseConnection, email: &str) -> Result<Option<Model>, ModelError> {
    Ok(Entity::find().filter(Column::Email.eq(email)).one(db).await?)
}

/// Delete by id; returns whether a row was removed.
pub async fn delete_by_id(db: &DatabaseConnection, id: i64) -> Result<bool, ModelError> {
    let res = Entity::delete_by_id(id).exec(db).await?;
    Ok(res.rows_affected > 0)
}
