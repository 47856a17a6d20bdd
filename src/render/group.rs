use crate::domain::bucket::Bucket;
use crate::domain::email::EmailRecord;

/// A record whose category is outside the known set and whose urgency does
/// not lift it into the urgent bucket.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("email #{index} has unknown category {category:?} (urgency {urgency_score})")]
pub struct DataContractViolation {
    /// Position in the fetched batch.
    pub index: usize,
    pub category: String,
    pub urgency_score: u32,
}

/// Stable partition of a batch into the seven display buckets.
#[derive(Debug)]
pub struct CategoryGroups<'a> {
    groups: [Vec<&'a EmailRecord>; 7],
    violations: Vec<DataContractViolation>,
}

impl<'a> CategoryGroups<'a> {
    pub fn partition(emails: &'a [EmailRecord]) -> Self {
        let mut groups: [Vec<&'a EmailRecord>; 7] = Default::default();
        let mut violations = Vec::new();

        for (index, email) in emails.iter().enumerate() {
            match email.bucket() {
                Some(bucket) => groups[bucket.position()].push(email),
                None => violations.push(DataContractViolation {
                    index,
                    category: email.category.clone(),
                    urgency_score: email.urgency_score,
                }),
            }
        }

        Self { groups, violations }
    }

    pub fn get(&self, bucket: Bucket) -> &[&'a EmailRecord] {
        &self.groups[bucket.position()]
    }

    /// Non-empty buckets in display order.
    pub fn non_empty(&self) -> impl Iterator<Item = (Bucket, &[&'a EmailRecord])> + '_ {
        Bucket::ALL
            .into_iter()
            .map(|b| (b, self.get(b)))
            .filter(|(_, items)| !items.is_empty())
    }

    pub fn violations(&self) -> &[DataContractViolation] {
        &self.violations
    }

    pub fn into_violations(self) -> Vec<DataContractViolation> {
        self.violations
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn email(subject: &str, category: &str, urgency: u32) -> EmailRecord {
        EmailRecord {
            id: None,
            sender: "someone@example.com".into(),
            subject: subject.into(),
            summary: String::new(),
            date: "2024-05-01 09:00".into(),
            category: category.into(),
            urgency_score: urgency,
            priority_score: 50,
            badges: vec![],
        }
    }

    fn subjects(items: &[&EmailRecord]) -> Vec<String> {
        items.iter().map(|e| e.subject.clone()).collect()
    }

    #[test]
    fn urgent_wins_over_category() {
        let batch = vec![email("a", "spam", 9), email("b", "social", 7), email("c", "social", 6)];
        let groups = CategoryGroups::partition(&batch);
        assert_eq!(subjects(groups.get(Bucket::Urgent)), ["a", "b"]);
        assert_eq!(subjects(groups.get(Bucket::Social)), ["c"]);
        assert!(groups.get(Bucket::Spam).is_empty());
    }

    #[test]
    fn order_is_fixed_and_partition_is_stable() {
        let batch = vec![
            email("s1", "spam", 0),
            email("p1", "promotion", 1),
            email("h1", "work-high", 5),
            email("s2", "spam", 2),
            email("l1", "work-low", 0),
            email("h2", "work-high", 3),
        ];
        let groups = CategoryGroups::partition(&batch);
        let order: Vec<(Bucket, Vec<String>)> = groups
            .non_empty()
            .map(|(b, items)| (b, subjects(items)))
            .collect();
        assert_eq!(
            order,
            vec![
                (Bucket::WorkHigh, vec!["h1".to_string(), "h2".to_string()]),
                (Bucket::WorkLow, vec!["l1".to_string()]),
                (Bucket::Promotion, vec!["p1".to_string()]),
                (Bucket::Spam, vec!["s1".to_string(), "s2".to_string()]),
            ]
        );
    }

    #[test]
    fn every_valid_record_lands_exactly_once() {
        let batch: Vec<EmailRecord> = ["work-high", "work-medium", "work-low", "promotion", "social", "spam"]
            .iter()
            .enumerate()
            .map(|(i, c)| email(&i.to_string(), c, (i % 7) as u32))
            .collect();
        let groups = CategoryGroups::partition(&batch);
        let total: usize = groups.non_empty().map(|(_, items)| items.len()).sum();
        assert_eq!(total, batch.len());
        assert!(groups.violations().is_empty());
        for e in &batch {
            let b = Bucket::from_category(&e.category).unwrap();
            assert_eq!(groups.get(b).iter().filter(|x| x.subject == e.subject).count(), 1);
        }
    }

    #[test]
    fn unknown_category_is_reported_not_misfiled() {
        let batch = vec![email("ok", "spam", 0), email("bad", "newsletter", 3)];
        let groups = CategoryGroups::partition(&batch);
        let total: usize = groups.non_empty().map(|(_, items)| items.len()).sum();
        assert_eq!(total, 1);
        assert_eq!(
            groups.violations(),
            [DataContractViolation {
                index: 1,
                category: "newsletter".into(),
                urgency_score: 3,
            }]
        );
    }

    #[test]
    fn violation_message_names_the_record() {
        let v = DataContractViolation {
            index: 4,
            category: "false".into(),
            urgency_score: 2,
        };
        let err: &dyn std::error::Error = &v;
        assert_eq!(
            err.to_string(),
            r#"email #4 has unknown category "false" (urgency 2)"#
        );
    }

    #[test]
    fn empty_batch_has_no_groups() {
        let groups = CategoryGroups::partition(&[]);
        assert_eq!(groups.non_empty().count(), 0);
    }
}
