// SPDX-License-Identifier: Apache-2.0

//! Batch convergence loops over the stable: feed, hatch, sell.
//!
//! Each loop is a fixpoint iteration against a remote-mutable inventory:
//! scan the current snapshot in a fixed deterministic order, find the
//! single best next mutation, issue exactly one batch-update round-trip,
//! and take the snapshot returned by that call as the sole input to the
//! next scan. The client never predicts server-side state across steps;
//! the refreshed snapshot is the single source of truth.
//!
//! Termination holds because every iteration strictly reduces the work
//! left: one food unit consumed, one egg hatched, or a whole surplus sold.
//!
//! The lookup tables below are immutable constants owned by this module.

use std::collections::HashSet;

use tracing::debug;

use crate::api::{ApiResult, BatchOp, HabiticaApi};
use crate::error::HabiticaError;
use crate::models::Items;

/// Sentinel suffix for foods that are never fed (e.g. saddles).
const IGNORE: &str = "ignore";

/// Fed-level value meaning "not yet hatched".
const UNHATCHED: i64 = -1;

/// Fed-level at which a pet turns into a mount.
const FED_MAX: i64 = 5;

/// Food name to the pet color variant it matches best.
const FEEDING: &[(&str, &str)] = &[
    ("Saddle", IGNORE),
    ("Meat", "Base"),
    ("CottonCandyBlue", "CottonCandyBlue"),
    ("CottonCandyPink", "CottonCandyPink"),
    ("Honey", "Golden"),
    ("Milk", "White"),
    ("Strawberry", "Red"),
    ("Chocolate", "Shade"),
    ("Fish", "Skeleton"),
    ("Potatoe", "Desert"),
    ("RottenMeat", "Zombie"),
];

/// The ten non-magical color variants, in hatch-priority order.
pub const PET_KINDS: [&str; 10] = [
    "Base",
    "CottonCandyBlue",
    "CottonCandyPink",
    "Golden",
    "White",
    "Red",
    "Shade",
    "Skeleton",
    "Desert",
    "Zombie",
];

/// Progress events emitted by the loops.
///
/// The loops report through a caller-supplied sink so the CLI can print
/// progressively and tests can capture the sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StableEvent {
    /// A held food has no known pet match; skipped (advisory).
    UnknownFood {
        /// Food name.
        food: String,
    },
    /// One food unit was fed to one pet.
    Fed {
        /// Pet that ate.
        pet: String,
        /// Food consumed.
        food: String,
    },
    /// One egg was hatched with one potion.
    Hatched {
        /// Egg type.
        egg: String,
        /// Potion color.
        potion: String,
    },
    /// Egg bookkeeping for one egg type: how many are still wanted.
    EggAccounting {
        /// Egg type.
        egg: String,
        /// Eggs currently held.
        have: i64,
        /// Eggs still needed for missing pets/mounts.
        need: i64,
        /// The missing creatures, tagged `[p]` (pet) or `[m]` (mount).
        wanted: Vec<String>,
    },
    /// Surplus eggs of one type were sold in a single batched call.
    SoldEggs {
        /// Egg type.
        egg: String,
        /// Units sold.
        count: i64,
    },
    /// A requested potion variant is not one of the known kinds (advisory).
    UnknownPotion {
        /// Requested variant name.
        kind: String,
    },
    /// A requested potion variant has no held units (advisory, no call).
    NoPotionsHeld {
        /// Variant name.
        kind: String,
    },
    /// All held potions of one variant were sold in a single batched call.
    SoldPotions {
        /// Variant name.
        kind: String,
        /// Units sold.
        count: i64,
    },
}

/// How a food name maps onto pets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FoodMatch<'a> {
    /// Never fed.
    Ignore,
    /// Feeds pets whose name ends in `-<suffix>`.
    Suffix(&'a str),
    /// Not in the table and no variant embedded in the name.
    Unknown,
}

/// Resolve the pet color variant a food matches.
///
/// Seasonal foods embed their variant after an underscore
/// (`Candy_Skeleton` feeds `-Skeleton` pets); everything else comes from
/// the fixed table.
#[must_use]
pub fn food_match(food: &str) -> FoodMatch<'_> {
    if let Some(&(_, suffix)) = FEEDING.iter().find(|&&(name, _)| name == food) {
        if suffix == IGNORE {
            return FoodMatch::Ignore;
        }
        return FoodMatch::Suffix(suffix);
    }
    if let Some((_, variant)) = food.split_once('_') {
        return FoodMatch::Suffix(variant);
    }
    FoodMatch::Unknown
}

/// The single feed mutation chosen from one snapshot scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedPick {
    /// Pet to feed.
    pub pet: String,
    /// Food to feed it.
    pub food: String,
}

/// Result of one feed scan over a snapshot.
#[derive(Debug, Default)]
pub struct FeedScan {
    /// The chosen mutation, if any pet is eligible.
    pub pick: Option<FeedPick>,
    /// Held foods with no known match, in scan order.
    pub unknown: Vec<String>,
}

/// Scan a snapshot for the next feed mutation.
///
/// Foods are visited in lexicographic order. For the first food with a
/// usable match, the eligible pet with the highest current fed-level wins:
/// a pet is eligible when it is hatched (fed-level > 0) and not already
/// maxed (fed-level 5 with the mount owned). Greedy on fed-level, so
/// nearly-ready pets finish first.
#[must_use]
pub fn pick_feed(items: &Items) -> FeedScan {
    let mut scan = FeedScan::default();
    for (food, &count) in &items.food {
        if count <= 0 {
            continue;
        }
        let suffix = match food_match(food) {
            FoodMatch::Ignore => continue,
            FoodMatch::Unknown => {
                scan.unknown.push(food.clone());
                continue;
            }
            FoodMatch::Suffix(suffix) => suffix,
        };

        let mut mouth: Option<&str> = None;
        let mut best = 0;
        for (pet, &fed) in &items.pets {
            if fed <= 0 {
                // Unhatched (or placeholder) pet.
                continue;
            }
            if fed == FED_MAX && items.mounts.get(pet).copied().unwrap_or(0) == 1 {
                // Nothing left to gain; the mount already exists.
                continue;
            }
            if !pet.ends_with(&format!("-{suffix}")) {
                continue;
            }
            if fed > best {
                best = fed;
                mouth = Some(pet);
            }
        }

        if let Some(pet) = mouth
            && scan.pick.is_none()
        {
            scan.pick = Some(FeedPick {
                pet: pet.to_string(),
                food: food.clone(),
            });
        }
    }
    scan
}

/// The single hatch mutation chosen from one snapshot scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HatchPick {
    /// Egg type.
    pub egg: String,
    /// Potion color; `<egg>-<potion>` is the creature being hatched.
    pub potion: String,
}

/// Scan a snapshot for the next hatch mutation.
///
/// Eggs are visited in lexicographic order, colors in [`PET_KINDS`]
/// declaration order. A creature is hatchable when the egg is held, the
/// pet record carries the unhatched sentinel, and a matching potion is
/// held.
#[must_use]
pub fn pick_hatch(items: &Items) -> Option<HatchPick> {
    for (egg, &count) in &items.eggs {
        if count <= 0 {
            continue;
        }
        for kind in PET_KINDS {
            let creature = format!("{egg}-{kind}");
            if items.pets.get(&creature).copied() != Some(UNHATCHED) {
                continue;
            }
            if items.hatching_potions.get(kind).copied().unwrap_or(0) <= 0 {
                continue;
            }
            return Some(HatchPick {
                egg: egg.clone(),
                potion: kind.to_string(),
            });
        }
    }
    None
}

/// How many eggs of one type are still wanted for future pets and mounts.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct EggNeed {
    /// Eggs still needed.
    pub need: i64,
    /// The missing creatures, tagged `[p]` (pet) or `[m]` (mount).
    pub wanted: Vec<String>,
}

/// Count the eggs of `egg` still needed across all color variants.
///
/// One egg per variant still lacking its mount plus one per variant still
/// unhatched.
#[must_use]
pub fn egg_need(items: &Items, egg: &str) -> EggNeed {
    let mut need = EggNeed::default();
    for kind in PET_KINDS {
        let creature = format!("{egg}-{kind}");
        if items.mounts.get(&creature).copied().unwrap_or(0) == 0 {
            need.need += 1;
            need.wanted.push(format!("{creature} [m]"));
        }
        if items.pets.get(&creature).copied() == Some(UNHATCHED) {
            need.need += 1;
            need.wanted.push(format!("{creature} [p]"));
        }
    }
    need
}

/// Feed all held food to the best-matching pets, one unit per round-trip,
/// until no eligible pairing remains.
///
/// # Errors
///
/// Propagates API failures immediately; nothing is retried.
pub async fn feed_all<A: HabiticaApi>(
    api: &A,
    mut report: impl FnMut(StableEvent),
) -> ApiResult<()> {
    let mut user = api.user().await?;
    let mut reported_unknown: HashSet<String> = HashSet::new();

    loop {
        let scan = pick_feed(&user.items);
        for food in scan.unknown {
            if reported_unknown.insert(food.clone()) {
                report(StableEvent::UnknownFood { food });
            }
        }
        let Some(pick) = scan.pick else {
            break;
        };
        debug!(pet = %pick.pet, food = %pick.food, "feeding");
        user = api
            .batch_ops(vec![BatchOp::feed(&pick.pet, &pick.food)])
            .await?;
        report(StableEvent::Fed {
            pet: pick.pet,
            food: pick.food,
        });
    }
    Ok(())
}

/// Hatch every creature a held egg and potion allow, then sell surplus
/// eggs, until neither action is possible.
///
/// Hatching takes priority: eggs are only counted as surplus once no
/// creature can be hatched anywhere. Both mutations carry post-conditions
/// checked against the refreshed snapshot.
///
/// # Errors
///
/// Returns `HabiticaError::Inconsistency` when a hatch leaves the
/// unhatched sentinel in place or a sell does not drop the egg count by
/// exactly the sold amount; the snapshot can no longer be trusted, so the
/// loop stops rather than continue on stale assumptions.
pub async fn hatch_all<A: HabiticaApi>(
    api: &A,
    mut report: impl FnMut(StableEvent),
) -> ApiResult<()> {
    let mut user = api.user().await?;
    let mut accounted: HashSet<String> = HashSet::new();

    loop {
        if let Some(pick) = pick_hatch(&user.items) {
            let creature = format!("{}-{}", pick.egg, pick.potion);
            debug!(%creature, "hatching");
            user = api
                .batch_ops(vec![BatchOp::hatch(&pick.egg, &pick.potion)])
                .await?;
            if user.items.pets.get(&creature).copied() == Some(UNHATCHED) {
                return Err(HabiticaError::Inconsistency {
                    message: format!("hatching {creature} did not take effect"),
                });
            }
            report(StableEvent::Hatched {
                egg: pick.egg,
                potion: pick.potion,
            });
            continue;
        }

        // Nothing hatchable anywhere; look for the first egg with surplus.
        let held: Vec<(String, i64)> = user
            .items
            .eggs
            .iter()
            .filter(|&(_, &count)| count > 0)
            .map(|(egg, &count)| (egg.clone(), count))
            .collect();

        let mut sold = false;
        for (egg, count) in held {
            let need = egg_need(&user.items, &egg);
            if accounted.insert(egg.clone()) {
                report(StableEvent::EggAccounting {
                    egg: egg.clone(),
                    have: count,
                    need: need.need,
                    wanted: need.wanted,
                });
            }
            let surplus = count - need.need;
            if surplus <= 0 {
                continue;
            }
            debug!(%egg, surplus, "selling surplus eggs");
            #[allow(clippy::cast_sign_loss)]
            let ops = vec![BatchOp::sell("eggs", &egg); surplus as usize];
            user = api.batch_ops(ops).await?;
            let after = user.items.eggs.get(&egg).copied().unwrap_or(0);
            if after != count - surplus {
                return Err(HabiticaError::Inconsistency {
                    message: format!(
                        "selling {surplus} {egg} egg(s) left {after}, expected {}",
                        count - surplus
                    ),
                });
            }
            report(StableEvent::SoldEggs {
                egg,
                count: surplus,
            });
            sold = true;
            break;
        }

        if !sold {
            break;
        }
    }
    Ok(())
}

/// Sell every held potion of the requested variants, one batched call per
/// variant.
///
/// `all` expands to the fixed ten-variant list. Unknown variant names and
/// variants with nothing held are reported and skipped without aborting
/// the rest of the request.
///
/// # Errors
///
/// Propagates API failures immediately.
pub async fn sell_potions<A: HabiticaApi>(
    api: &A,
    kinds: &[String],
    mut report: impl FnMut(StableEvent),
) -> ApiResult<()> {
    let requested: Vec<String> = if kinds.len() == 1 && kinds[0] == "all" {
        PET_KINDS.iter().map(ToString::to_string).collect()
    } else {
        kinds.to_vec()
    };

    let mut user = api.user().await?;
    let mut handled: HashSet<String> = HashSet::new();

    loop {
        let mut sold = false;
        for kind in &requested {
            if handled.contains(kind) {
                continue;
            }
            if !PET_KINDS.contains(&kind.as_str()) {
                handled.insert(kind.clone());
                report(StableEvent::UnknownPotion { kind: kind.clone() });
                continue;
            }
            let count = user
                .items
                .hatching_potions
                .get(kind)
                .copied()
                .unwrap_or(0);
            if count <= 0 {
                handled.insert(kind.clone());
                report(StableEvent::NoPotionsHeld { kind: kind.clone() });
                continue;
            }
            debug!(%kind, count, "selling potions");
            #[allow(clippy::cast_sign_loss)]
            let ops = vec![BatchOp::sell("hatchingPotions", kind); count as usize];
            user = api.batch_ops(ops).await?;
            handled.insert(kind.clone());
            report(StableEvent::SoldPotions {
                kind: kind.clone(),
                count,
            });
            sold = true;
            break;
        }
        if !sold {
            break;
        }
    }
    Ok(())
}
