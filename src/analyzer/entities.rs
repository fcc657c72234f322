//! Frequency ranking of recognized entity mentions.

use crate::models::EntityMention;

const TOP_ENTITY_LIMIT: usize = 10;

/// Rank surface texts by occurrence count, descending, keeping at most ten.
///
/// Counting is insertion-ordered and the descending sort is stable, so
/// surface texts with equal counts stay in first-encountered order.
pub fn rank_entities(mentions: &[EntityMention]) -> Vec<(String, usize)> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    for mention in mentions {
        match counts.iter_mut().find(|(word, _)| *word == mention.word) {
            Some((_, count)) => *count += 1,
            None => counts.push((mention.word.clone(), 1)),
        }
    }

    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts.truncate(TOP_ENTITY_LIMIT);
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mention(word: &str) -> EntityMention {
        EntityMention {
            word: word.to_string(),
            entity_group: "ORG".to_string(),
            score: 0.9,
        }
    }

    #[test]
    fn ranks_by_descending_count() {
        let mentions: Vec<_> = ["Apple", "Apple", "Google", "Microsoft", "Google", "Apple"]
            .iter()
            .map(|w| mention(w))
            .collect();

        let ranked = rank_entities(&mentions);
        assert_eq!(
            ranked,
            vec![
                ("Apple".to_string(), 3),
                ("Google".to_string(), 2),
                ("Microsoft".to_string(), 1),
            ]
        );
    }

    #[test]
    fn equal_counts_keep_first_seen_order() {
        let mentions: Vec<_> = ["Berlin", "Paris", "Berlin", "Paris", "Oslo"]
            .iter()
            .map(|w| mention(w))
            .collect();

        let ranked = rank_entities(&mentions);
        assert_eq!(
            ranked,
            vec![
                ("Berlin".to_string(), 2),
                ("Paris".to_string(), 2),
                ("Oslo".to_string(), 1),
            ]
        );
    }

    #[test]
    fn caps_at_ten_entries() {
        let mentions: Vec<_> = (0..25).map(|i| mention(&format!("Entity{i}"))).collect();
        let ranked = rank_entities(&mentions);
        assert_eq!(ranked.len(), 10);
    }

    #[test]
    fn no_mentions_rank_empty() {
        assert!(rank_entities(&[]).is_empty());
    }

    #[test]
    fn surface_text_is_the_key_not_entity_type() {
        let mut mentions = vec![mention("Amazon"), mention("Amazon")];
        mentions[1].entity_group = "LOC".to_string();

        let ranked = rank_entities(&mentions);
        assert_eq!(ranked, vec![("Amazon".to_string(), 2)]);
    }
}
