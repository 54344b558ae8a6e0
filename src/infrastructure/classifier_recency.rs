use chrono::{DateTime, TimeDelta, Utc};
use log::{debug, warn};

use crate::{RecencyBucket, RecencyBuckets, Repository};

/// Partitions repositories by the time elapsed since their last update.
#[derive(Debug, Default, Clone, Copy)]
pub struct RecencyClassifier;

impl RecencyClassifier {
    /// Creates a new `RecencyClassifier` instance.
    pub fn new() -> Self {
        Self
    }

    /// Computes the bucket of a repository updated at `updated_at`, seen from `now`.
    ///
    /// A repository updated exactly one hour ago matches neither the fresh
    /// (`< 1h`) nor the recent (`> 1h && < 2h`) condition and lands in the stale bucket.
    pub fn bucket_of(&self, updated_at: DateTime<Utc>, now: DateTime<Utc>) -> RecencyBucket {
        let one_hour = TimeDelta::hours(1);
        let two_hours = TimeDelta::hours(2);
        let elapsed = now - updated_at;
        if elapsed < one_hour {
            RecencyBucket::Fresh
        } else if elapsed > one_hour && elapsed < two_hours {
            RecencyBucket::Recent
        } else {
            if elapsed == one_hour {
                warn!("Repository updated exactly one hour ago at {updated_at} is reported as stale");
            }
            RecencyBucket::Stale
        }
    }

    /// Classifies the repositories into recency buckets, each sorted by ascending update time.
    pub fn classify(&self, repositories: Vec<Repository>, now: DateTime<Utc>) -> RecencyBuckets {
        let mut buckets = RecencyBuckets::default();
        for repository in repositories {
            let bucket = self.bucket_of(repository.updated_at, now);
            debug!("Classified {repository} as {bucket:?}");
            buckets.bucket_mut(bucket).push(repository);
        }
        for bucket in RecencyBucket::REPORT_ORDER {
            buckets
                .bucket_mut(bucket)
                .sort_by(|a, b| a.updated_at.cmp(&b.updated_at));
        }

        buckets
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 1, 12, 0, 0).unwrap()
    }

    fn ids(repositories: &[Repository]) -> Vec<u64> {
        repositories.iter().map(|repository| *repository.id).collect()
    }

    #[test]
    fn bucket_of_repository_updated_now_is_fresh() {
        let classifier = RecencyClassifier::new();

        assert_eq!(RecencyBucket::Fresh, classifier.bucket_of(now(), now()));
    }

    #[test]
    fn bucket_of_repository_updated_in_the_future_is_fresh() {
        let classifier = RecencyClassifier::new();

        let bucket = classifier.bucket_of(now() + TimeDelta::minutes(5), now());

        assert_eq!(RecencyBucket::Fresh, bucket);
    }

    #[test]
    fn bucket_of_repository_updated_90_minutes_ago_is_recent() {
        let classifier = RecencyClassifier::new();

        let bucket = classifier.bucket_of(now() - TimeDelta::minutes(90), now());

        assert_eq!(RecencyBucket::Recent, bucket);
    }

    #[test]
    fn bucket_of_repository_updated_3_hours_ago_is_stale() {
        let classifier = RecencyClassifier::new();

        let bucket = classifier.bucket_of(now() - TimeDelta::hours(3), now());

        assert_eq!(RecencyBucket::Stale, bucket);
    }

    #[test]
    fn bucket_boundaries() {
        let classifier = RecencyClassifier::new();
        let bucket_at = |elapsed: TimeDelta| classifier.bucket_of(now() - elapsed, now());

        assert_eq!(
            RecencyBucket::Fresh,
            bucket_at(TimeDelta::hours(1) - TimeDelta::seconds(1))
        );
        assert_eq!(RecencyBucket::Stale, bucket_at(TimeDelta::hours(1)));
        assert_eq!(
            RecencyBucket::Recent,
            bucket_at(TimeDelta::hours(1) + TimeDelta::seconds(1))
        );
        assert_eq!(
            RecencyBucket::Recent,
            bucket_at(TimeDelta::hours(2) - TimeDelta::seconds(1))
        );
        assert_eq!(RecencyBucket::Stale, bucket_at(TimeDelta::hours(2)));
    }

    #[test]
    fn classify_empty_list_yields_empty_buckets() {
        let buckets = RecencyClassifier::new().classify(vec![], now());

        assert!(buckets.is_empty());
    }

    #[test]
    fn classify_single_fresh_repository() {
        let repositories = vec![Repository::dummy(
            7,
            "x",
            now() - TimeDelta::minutes(45),
        )];

        let buckets = RecencyClassifier::new().classify(repositories, now());

        assert_eq!(vec![7], ids(buckets.bucket(RecencyBucket::Fresh)));
        assert!(buckets.bucket(RecencyBucket::Recent).is_empty());
        assert!(buckets.bucket(RecencyBucket::Stale).is_empty());
    }

    #[test]
    fn classify_sorts_stale_repositories_oldest_first() {
        let repositories = vec![
            Repository::dummy(1, "ten-hours", now() - TimeDelta::hours(10)),
            Repository::dummy(2, "twenty-hours", now() - TimeDelta::hours(20)),
        ];

        let buckets = RecencyClassifier::new().classify(repositories, now());

        assert_eq!(vec![2, 1], ids(buckets.bucket(RecencyBucket::Stale)));
    }

    #[test]
    fn classify_partitions_and_sorts_every_bucket() {
        let repositories = vec![
            Repository::dummy(1, "a", now() - TimeDelta::minutes(10)),
            Repository::dummy(2, "b", now() - TimeDelta::hours(5)),
            Repository::dummy(3, "c", now() - TimeDelta::minutes(100)),
            Repository::dummy(4, "d", now() - TimeDelta::minutes(50)),
            Repository::dummy(5, "e", now() - TimeDelta::days(3)),
            Repository::dummy(6, "f", now() - TimeDelta::minutes(70)),
            Repository::dummy(7, "g", now() - TimeDelta::minutes(10)),
        ];

        let buckets = RecencyClassifier::new().classify(repositories, now());

        assert_eq!(7, buckets.len());
        assert_eq!(vec![4, 1, 7], ids(buckets.bucket(RecencyBucket::Fresh)));
        assert_eq!(vec![3, 6], ids(buckets.bucket(RecencyBucket::Recent)));
        assert_eq!(vec![5, 2], ids(buckets.bucket(RecencyBucket::Stale)));
        for bucket in RecencyBucket::REPORT_ORDER {
            assert!(
                buckets
                    .bucket(bucket)
                    .windows(2)
                    .all(|pair| pair[0].updated_at <= pair[1].updated_at)
            );
        }
    }
}
