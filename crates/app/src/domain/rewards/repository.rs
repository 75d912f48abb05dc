//! Rewards Repository

use sqlx::{Postgres, Transaction, query_scalar};

use crate::domain::users::records::UserUuid;

const CREDIT_POINTS_SQL: &str = include_str!("sql/credit_points.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgRewardsRepository;

impl PgRewardsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    /// Add `points` to the user's balance and return the new balance.
    pub(crate) async fn credit(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        user: UserUuid,
        points: u64,
    ) -> Result<u64, sqlx::Error> {
        let points = i64::try_from(points).map_err(|e| sqlx::Error::Encode(Box::new(e)))?;

        let balance: i64 = query_scalar(CREDIT_POINTS_SQL)
            .bind(user.into_uuid())
            .bind(points)
            .fetch_one(&mut **tx)
            .await?;

        u64::try_from(balance).map_err(|e| sqlx::Error::ColumnDecode {
            index: "loyalty_points".to_string(),
            source: Box::new(e),
        })
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::{domain::users::UsersService, test::TestContext};

    use super::*;

    #[tokio::test]
    async fn credit_accumulates_on_the_balance() -> TestResult {
        let ctx = TestContext::new().await;
        let user = ctx.create_user("promoter").await;
        let rewards = PgRewardsRepository::new();

        let mut tx = ctx.app_db.begin().await?;
        let first = rewards.credit(&mut tx, user, 10).await?;
        let second = rewards.credit(&mut tx, user, 10).await?;
        tx.commit().await?;

        assert_eq!(first, 10);
        assert_eq!(second, 20);
        assert_eq!(ctx.users.get_user(user).await?.loyalty_points, 20);

        Ok(())
    }

    #[tokio::test]
    async fn credit_unknown_user_is_row_not_found() -> TestResult {
        let ctx = TestContext::new().await;

        let mut tx = ctx.app_db.begin().await?;
        let result = PgRewardsRepository::new()
            .credit(&mut tx, UserUuid::new(), 10)
            .await;

        assert!(
            matches!(result, Err(sqlx::Error::RowNotFound)),
            "expected RowNotFound, got {result:?}"
        );

        Ok(())
    }
}
