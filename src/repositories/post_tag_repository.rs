use std::collections::BTreeSet;
use sea_orm::*;
use crate::entities::{post, post_tag, tag};

/// Rows to insert and delete to turn the current association set into the desired one.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct AssociationDiff {
    pub added: Vec<i32>,
    pub removed: Vec<i32>,
}

impl AssociationDiff {
    pub fn between(current: &BTreeSet<i32>, desired: &BTreeSet<i32>) -> Self {
        Self {
            added: desired.difference(current).copied().collect(),
            removed: current.difference(desired).copied().collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty()
    }
}

pub struct PostTagRepository;

impl PostTagRepository {
    /// Submitted tag ids that name an existing tag; unknown ids are dropped.
    pub async fn resolve_tag_ids<C>(db: &C, ids: &[i32]) -> Result<BTreeSet<i32>, DbErr>
    where C: ConnectionTrait {
        if ids.is_empty() {
            return Ok(BTreeSet::new());
        }
        let found = tag::Entity::find()
            .filter(tag::Column::Id.is_in(ids.iter().copied()))
            .all(db)
            .await?;
        Ok(found.into_iter().map(|t| t.id).collect())
    }

    /// Submitted post ids that name an existing post; unknown ids are dropped.
    pub async fn resolve_post_ids<C>(db: &C, ids: &[i32]) -> Result<BTreeSet<i32>, DbErr>
    where C: ConnectionTrait {
        if ids.is_empty() {
            return Ok(BTreeSet::new());
        }
        let found = post::Entity::find()
            .filter(post::Column::Id.is_in(ids.iter().copied()))
            .all(db)
            .await?;
        Ok(found.into_iter().map(|p| p.id).collect())
    }

    pub async fn tag_ids_for_post<C>(db: &C, post_id: i32) -> Result<BTreeSet<i32>, DbErr>
    where C: ConnectionTrait {
        let rows = post_tag::Entity::find()
            .filter(post_tag::Column::PostId.eq(post_id))
            .all(db)
            .await?;
        Ok(rows.into_iter().map(|r| r.tag_id).collect())
    }

    pub async fn post_ids_for_tag<C>(db: &C, tag_id: i32) -> Result<BTreeSet<i32>, DbErr>
    where C: ConnectionTrait {
        let rows = post_tag::Entity::find()
            .filter(post_tag::Column::TagId.eq(tag_id))
            .all(db)
            .await?;
        Ok(rows.into_iter().map(|r| r.post_id).collect())
    }

    /// Makes the post's tag set exactly `desired`.
    pub async fn replace_tags_for_post<C>(
        db: &C,
        post_id: i32,
        desired: &BTreeSet<i32>,
    ) -> Result<AssociationDiff, DbErr>
    where C: ConnectionTrait {
        let current = Self::tag_ids_for_post(db, post_id).await?;
        let diff = AssociationDiff::between(&current, desired);

        if !diff.removed.is_empty() {
            post_tag::Entity::delete_many()
                .filter(post_tag::Column::PostId.eq(post_id))
                .filter(post_tag::Column::TagId.is_in(diff.removed.iter().copied()))
                .exec(db)
                .await?;
        }
        if !diff.added.is_empty() {
            let links = diff.added.iter().map(|&tag_id| post_tag::ActiveModel {
                post_id: Set(post_id),
                tag_id: Set(tag_id),
            });
            post_tag::Entity::insert_many(links).exec_without_returning(db).await?;
        }

        Ok(diff)
    }

    /// Makes the tag's post set exactly `desired`.
    pub async fn replace_posts_for_tag<C>(
        db: &C,
        tag_id: i32,
        desired: &BTreeSet<i32>,
    ) -> Result<AssociationDiff, DbErr>
    where C: ConnectionTrait {
        let current = Self::post_ids_for_tag(db, tag_id).await?;
        let diff = AssociationDiff::between(&current, desired);

        if !diff.removed.is_empty() {
            post_tag::Entity::delete_many()
                .filter(post_tag::Column::TagId.eq(tag_id))
                .filter(post_tag::Column::PostId.is_in(diff.removed.iter().copied()))
                .exec(db)
                .await?;
        }
        if !diff.added.is_empty() {
            let links = diff.added.iter().map(|&post_id| post_tag::ActiveModel {
                post_id: Set(post_id),
                tag_id: Set(tag_id),
            });
            post_tag::Entity::insert_many(links).exec_without_returning(db).await?;
        }

        Ok(diff)
    }

    pub async fn delete_for_posts<C>(db: &C, post_ids: &[i32]) -> Result<u64, DbErr>
    where C: ConnectionTrait {
        if post_ids.is_empty() {
            return Ok(0);
        }
        let res = post_tag::Entity::delete_many()
            .filter(post_tag::Column::PostId.is_in(post_ids.iter().copied()))
            .exec(db)
            .await?;
        Ok(res.rows_affected)
    }

    pub async fn delete_for_tag<C>(db: &C, tag_id: i32) -> Result<u64, DbErr>
    where C: ConnectionTrait {
        let res = post_tag::Entity::delete_many()
            .filter(post_tag::Column::TagId.eq(tag_id))
            .exec(db)
            .await?;
        Ok(res.rows_affected)
    }
}
