//! GOAP search: finds minimum-cost plans over goals' candidate actions.
//!
//! See [`Planner`] for more info.

use crate::action::Action;
use crate::goal::Goal;
use crate::plan::Plan;
use crate::predicate::{Predicate, PredicateId};
use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Origin {
    Initial,
    Produced,
}

#[derive(Clone)]
struct PoolEntry {
    predicate: Predicate,
    origin: Origin,
}

struct ChainResult {
    order: Vec<usize>,
    bound: Vec<Vec<Option<Predicate>>>,
    consumed_ids: Vec<PredicateId>,
    cost: u32,
}

/// Searches for least-cost plans over a goal's candidate actions.
///
/// A goal's plan always uses every one of that goal's actions (the full
/// chain), so a goal's total cost is the sum of its actions' costs
/// regardless of the order the planner finds to execute them in; the
/// search only has to decide whether *some* valid ordering exists.
///
/// # Example
/// ```
/// use nai_goap::prelude::*;
/// use std::cell::RefCell;
/// use std::rc::Rc;
///
/// struct ChopWood;
/// impl Goal for ChopWood {
///     fn actions(&self) -> Vec<Action> {
///         vec![Action::new(vec!["HasAxe".to_owned()], vec![Predicate::new(2, "HasWood")])]
///     }
/// }
///
/// let goals: Vec<Rc<RefCell<dyn Goal>>> = vec![Rc::new(RefCell::new(ChopWood))];
/// let predicates = vec![Predicate::new(1, "HasAxe")];
///
/// let planner = Planner::new();
/// let plan = planner.get_plan(&goals, &predicates).unwrap();
/// assert_eq!(plan.len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct Planner;

impl Planner {
    pub fn new() -> Self {
        Self
    }

    /// Finds the minimum-cost plan across all goals whose cost hint is not
    /// disabled (`None`) this tick. Ties are broken by goal declaration
    /// order (the earlier goal wins). Returns `None` if there are no
    /// predicates, no goals, or no goal's action set admits a valid chain.
    pub fn get_plan(&self, goals: &[Rc<RefCell<dyn Goal>>], predicates: &[Predicate]) -> Option<Plan> {
        if predicates.is_empty() || goals.is_empty() {
            return None;
        }

        let mut best: Option<(usize, Vec<Action>, ChainResult)> = None;

        for (goal_index, goal) in goals.iter().enumerate() {
            let goal_ref = goal.borrow();
            if goal_ref.cost(predicates).is_none() {
                continue;
            }
            let actions = goal_ref.actions();
            drop(goal_ref);

            if actions.is_empty() {
                continue;
            }

            let Some(result) = search_chain(&actions, predicates) else {
                continue;
            };

            let replace = match &best {
                None => true,
                Some((_, _, current_best)) => result.cost < current_best.cost,
            };
            if replace {
                best = Some((goal_index, actions, result));
            }
        }

        best.map(|(goal_index, actions, result)| build_plan(goal_index, actions, result))
    }

    /// Backward-chains to find the ordered list of sub-plans whose combined
    /// postconditions cover every one of `desired`'s predicate names,
    /// ordered by ascending cost. A single goal covering all of `desired`
    /// is preferred over a multi-goal combination even when a combination
    /// would tie on cost. Returns an empty list if no combination of the
    /// available goals fully covers `desired`.
    pub fn get_plan_to_reach(
        &self,
        goals: &[Rc<RefCell<dyn Goal>>],
        predicates: &[Predicate],
        desired: &[Predicate],
    ) -> Vec<Plan> {
        if desired.is_empty() || goals.is_empty() {
            return Vec::new();
        }

        struct Candidate {
            goal_index: usize,
            actions: Vec<Action>,
            result: ChainResult,
        }

        let mut candidates: Vec<Candidate> = Vec::new();
        for (goal_index, goal) in goals.iter().enumerate() {
            let goal_ref = goal.borrow();
            if goal_ref.cost(predicates).is_none() {
                continue;
            }
            let actions = goal_ref.actions();
            drop(goal_ref);

            if actions.is_empty() {
                continue;
            }

            if let Some(result) = search_chain(&actions, predicates) {
                candidates.push(Candidate {
                    goal_index,
                    actions,
                    result,
                });
            }
        }

        candidates.sort_by(|a, b| a.result.cost.cmp(&b.result.cost).then(a.goal_index.cmp(&b.goal_index)));

        let desired_names: Vec<&str> = desired.iter().map(Predicate::name).collect();

        if let Some(pos) = candidates.iter().position(|c| covers_all(&c.actions, &desired_names)) {
            let candidate = candidates.remove(pos);
            return vec![build_plan(candidate.goal_index, candidate.actions, candidate.result)];
        }

        let mut remaining: HashSet<&str> = desired_names.iter().copied().collect();
        let mut chosen_indices = Vec::new();
        let mut used = vec![false; candidates.len()];

        while !remaining.is_empty() {
            let pick = candidates
                .iter()
                .enumerate()
                .filter(|(i, _)| !used[*i])
                .filter_map(|(i, c)| {
                    let covered = covered_names(&c.actions);
                    let gain = covered.iter().filter(|n| remaining.contains(n.as_str())).count();
                    (gain > 0).then_some((i, gain))
                })
                .max_by_key(|&(_, gain)| gain);

            match pick {
                Some((i, _)) => {
                    used[i] = true;
                    let covered = covered_names(&candidates[i].actions);
                    remaining.retain(|n| !covered.iter().any(|c| c.as_str() == *n));
                    chosen_indices.push(i);
                }
                None => break,
            }
        }

        if !remaining.is_empty() {
            log::debug!("get_plan_to_reach: no combination of goals covers every desired predicate");
            return Vec::new();
        }

        chosen_indices.sort_unstable();
        let mut candidates: Vec<Option<Candidate>> = candidates.into_iter().map(Some).collect();
        chosen_indices
            .into_iter()
            .map(|i| {
                let candidate = candidates[i].take().expect("candidate picked twice");
                build_plan(candidate.goal_index, candidate.actions, candidate.result)
            })
            .collect()
    }

    /// Moves the predicates named in `consumed_ids` (in the given order) to
    /// the front of `predicates`, leaving the relative order of every other
    /// predicate unchanged. Used to surface, in the caller's own predicate
    /// list, which predicates a plan actually consumed from the current set
    /// (as opposed to predicates produced mid-chain by earlier actions).
    pub fn reorder_consumed(predicates: &mut Vec<Predicate>, consumed_ids: &[PredicateId]) {
        let mut front = Vec::with_capacity(consumed_ids.len());
        for id in consumed_ids {
            if let Some(pos) = predicates.iter().position(|p| p.id() == *id) {
                front.push(predicates.remove(pos));
            }
        }
        front.append(predicates);
        *predicates = front;
    }
}

fn build_plan(goal_index: usize, actions: Vec<Action>, result: ChainResult) -> Plan {
    let mut slots: Vec<Option<Action>> = actions.into_iter().map(Some).collect();
    let mut ordered = Vec::with_capacity(result.order.len());
    for (idx, bound) in result.order.into_iter().zip(result.bound) {
        let mut action = slots[idx].take().expect("action scheduled twice");
        action.bind(bound);
        action.reset_accomplished();
        ordered.push(action);
    }
    Plan::new(ordered, result.cost, goal_index, result.consumed_ids)
}

fn covers_all(actions: &[Action], names: &[&str]) -> bool {
    names
        .iter()
        .all(|&name| actions.iter().any(|a| a.postconditions().iter().any(|p| p.matches_name(name))))
}

fn covered_names(actions: &[Action]) -> Vec<String> {
    actions
        .iter()
        .flat_map(|a| a.postconditions().iter().map(|p| p.name().to_owned()))
        .collect()
}

fn search_chain(actions: &[Action], predicates: &[Predicate]) -> Option<ChainResult> {
    let initial_pool: Vec<PoolEntry> = predicates
        .iter()
        .map(|p| PoolEntry {
            predicate: p.clone(),
            origin: Origin::Initial,
        })
        .collect();

    let full_mask = if actions.len() >= 64 {
        u64::MAX
    } else {
        (1u64 << actions.len()) - 1
    };

    let mut memo = HashSet::new();
    search(actions, full_mask, initial_pool, Vec::new(), Vec::new(), Vec::new(), 0, &mut memo)
}

/// Depth-first search over orderings of the remaining actions (tracked as a
/// bitmask). A (remaining-set, next-action) pair that has already failed is
/// memoized so it is never re-explored within this call.
#[allow(clippy::too_many_arguments)]
fn search(
    actions: &[Action],
    remaining_mask: u64,
    pool: Vec<PoolEntry>,
    order: Vec<usize>,
    bound: Vec<Vec<Option<Predicate>>>,
    consumed_ids: Vec<PredicateId>,
    cost: u32,
    memo: &mut HashSet<u64>,
) -> Option<ChainResult> {
    if remaining_mask == 0 {
        return Some(ChainResult {
            order,
            bound,
            consumed_ids,
            cost,
        });
    }

    if memo.contains(&remaining_mask) {
        return None;
    }

    for idx in 0..actions.len() {
        let bit = 1u64 << idx;
        if remaining_mask & bit == 0 {
            continue;
        }

        if let Some((new_pool, bound_preds, matched_initial_ids)) = try_bind(&actions[idx], &pool) {
            let mut next_order = order.clone();
            next_order.push(idx);
            let mut next_bound = bound.clone();
            next_bound.push(bound_preds);
            let mut next_consumed = consumed_ids.clone();
            next_consumed.extend(matched_initial_ids);

            if let Some(result) = search(
                actions,
                remaining_mask & !bit,
                new_pool,
                next_order,
                next_bound,
                next_consumed,
                cost + actions[idx].cost(),
                memo,
            ) {
                return Some(result);
            }
        }
    }

    memo.insert(remaining_mask);
    None
}

type BindResult = (Vec<PoolEntry>, Vec<Option<Predicate>>, Vec<PredicateId>);

fn try_bind(action: &Action, pool: &[PoolEntry]) -> Option<BindResult> {
    let mut taken = vec![false; pool.len()];
    let mut bound = Vec::with_capacity(action.preconditions().len());
    let mut matched_indices = Vec::with_capacity(action.preconditions().len());

    for name in action.preconditions() {
        let found = pool
            .iter()
            .enumerate()
            .find(|(i, entry)| !taken[*i] && entry.predicate.matches_name(name));
        match found {
            Some((i, entry)) => {
                taken[i] = true;
                matched_indices.push(i);
                bound.push(Some(entry.predicate.clone()));
            }
            None => return None,
        }
    }

    let matched_initial_ids: Vec<PredicateId> = matched_indices
        .iter()
        .filter(|&&i| pool[i].origin == Origin::Initial)
        .map(|&i| pool[i].predicate.id())
        .collect();

    let mut new_pool: Vec<PoolEntry> = pool
        .iter()
        .enumerate()
        .filter(|(i, _)| !matched_indices.contains(i))
        .map(|(_, entry)| entry.clone())
        .collect();
    for postcondition in action.postconditions() {
        new_pool.push(PoolEntry {
            predicate: postcondition.clone(),
            origin: Origin::Produced,
        });
    }

    Some((new_pool, bound, matched_initial_ids))
}
