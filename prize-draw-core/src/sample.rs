use std::collections::HashSet;

use tracing::debug;

use crate::error::DrawError;
use crate::participant::{AppointRule, HasUid};
use crate::shuffle::{random_index, shuffle};

/// Draws `count` elements from `pool` without replacement; every element has
/// equal inclusion probability.
///
/// `count == 0` returns an empty result and `count >= pool.len()` returns a
/// full shuffle of the pool.
pub fn sample_without_replacement<T: Clone>(
    pool: &[T],
    count: usize,
) -> Result<Vec<T>, DrawError> {
    if count == 0 {
        return Ok(Vec::new());
    }
    if count >= pool.len() {
        return shuffle(pool);
    }
    let mut remaining = pool.to_vec();
    let mut picked = Vec::with_capacity(count);
    for _ in 0..count {
        let index = random_index(remaining.len())?;
        picked.push(remaining.swap_remove(index));
    }
    Ok(picked)
}

/// Draws `count` winners for `current_prize_id`, honoring appointment rules
/// and excluding previous winners.
///
/// Entries appointed to the current prize fill slots first; entries appointed
/// only to other prizes sit this draw out; everyone in `already_won` is
/// dropped unconditionally, as is every entry without a uid (no identity
/// means no eligibility once a prize is targeted). Remaining slots are
/// filled by an unbiased draw from the unappointed rest of the pool. The result is shuffled before it
/// is returned, so its order reveals nothing about who was pinned. When
/// fewer eligible entries exist than `count`, the result is simply shorter.
///
/// Without a `current_prize_id` the rules cannot apply and the draw falls
/// back to [`sample_without_replacement`].
pub fn sample_with_appointments<T>(
    pool: &[T],
    count: usize,
    current_prize_id: Option<&str>,
    rules: &[AppointRule],
    already_won: &[T],
) -> Result<Vec<T>, DrawError>
where
    T: HasUid + Clone,
{
    if count == 0 {
        return Ok(Vec::new());
    }
    let Some(prize_id) = current_prize_id else {
        return sample_without_replacement(pool, count);
    };

    let already_won_uids: HashSet<&str> = already_won.iter().filter_map(HasUid::uid).collect();
    let this_prize_uids: HashSet<&str> = rules
        .iter()
        .filter(|rule| rule.prize_id == prize_id)
        .map(|rule| rule.person_uid.as_str())
        .collect();
    let appointed_uids: HashSet<&str> =
        rules.iter().map(|rule| rule.person_uid.as_str()).collect();

    let mut forced = Vec::new();
    let mut normal = Vec::new();
    for entry in pool {
        // No uid: can neither be pinned nor matched against already-won,
        // so the entry sits out every prize-targeted draw.
        let Some(uid) = entry.uid() else {
            continue;
        };
        if already_won_uids.contains(uid) {
            continue;
        }
        if appointed_uids.contains(uid) {
            // Appointees only ever appear in their own prize's draw.
            if this_prize_uids.contains(uid) {
                forced.push(entry.clone());
            }
            continue;
        }
        normal.push(entry.clone());
    }
    debug!(
        "prize {prize_id}: {} appointed, {} normal, pool of {}",
        forced.len(),
        normal.len(),
        pool.len()
    );

    // More appointees than slots: shuffle first so that who gets dropped is
    // random rather than decided by rule order.
    if forced.len() > count {
        forced = shuffle(&forced)?;
        forced.truncate(count);
    }

    let mut winners = forced;
    let mut remaining = normal;
    while winners.len() < count && !remaining.is_empty() {
        let index = random_index(remaining.len())?;
        winners.push(remaining.swap_remove(index));
    }

    // Final shuffle hides which winners were pinned.
    shuffle(&winners)
}
