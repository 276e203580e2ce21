use diesel::prelude::*;

use crate::domain::category::{Category, CategoryUpdate, DeleteCategoryOutcome, NewCategory};
use crate::domain::types::CategoryId;
use crate::models::category::{
    Category as DbCategory, CategoryChangeset, NewCategory as DbNewCategory,
};
use crate::repository::{CategoryReader, CategoryWriter, DieselRepository, RepositoryResult};

impl CategoryReader for DieselRepository {
    fn list_categories(&self) -> RepositoryResult<Vec<Category>> {
        use crate::schema::categories;

        self.provider().with_transaction(|conn| {
            let items = categories::table
                .order(categories::name.asc())
                .load::<DbCategory>(conn)?
                .into_iter()
                .map(TryInto::try_into)
                .collect::<Result<Vec<Category>, _>>()?;

            Ok(items)
        })
    }

    fn get_category(&self, id: CategoryId) -> RepositoryResult<Option<Category>> {
        use crate::schema::categories;

        self.provider().with_transaction(|conn| {
            let category = categories::table
                .find(id.get())
                .first::<DbCategory>(conn)
                .optional()?;

            Ok(category.map(TryInto::try_into).transpose()?)
        })
    }
}

impl CategoryWriter for DieselRepository {
    fn create_category(&self, category: &NewCategory) -> RepositoryResult<CategoryId> {
        use crate::schema::categories;

        let db_category: DbNewCategory = category.clone().into();

        self.provider().with_transaction(|conn| {
            let id = diesel::insert_into(categories::table)
                .values(&db_category)
                .returning(categories::id)
                .get_result::<i32>(conn)?;

            Ok(CategoryId::new(id)?)
        })
    }

    fn update_category(&self, id: CategoryId, update: &CategoryUpdate) -> RepositoryResult<bool> {
        use crate::schema::categories;

        let changeset: CategoryChangeset = update.clone().into();

        self.provider().with_transaction(|conn| {
            let affected = diesel::update(categories::table.find(id.get()))
                .set(&changeset)
                .execute(conn)?;

            Ok(affected > 0)
        })
    }

    fn delete_category(&self, id: CategoryId) -> RepositoryResult<DeleteCategoryOutcome> {
        use crate::schema::{categories, videos};

        // Count and delete are separate statements; a video inserted in
        // between is not seen by the check.
        self.provider().with_transaction(|conn| {
            let linked_videos = videos::table
                .filter(videos::category_id.eq(id.get()))
                .count()
                .get_result::<i64>(conn)?;

            if linked_videos > 0 {
                return Ok(DeleteCategoryOutcome::HasVideos);
            }

            let affected = diesel::delete(categories::table.find(id.get())).execute(conn)?;

            Ok(if affected == 0 {
                DeleteCategoryOutcome::NotFound
            } else {
                DeleteCategoryOutcome::Deleted
            })
        })
    }
}
