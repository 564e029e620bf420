//! Account tree construction with rollups.
//!
//! Accounts are held in a flat arena with a `parent_id -> children` index.
//! Roots are accounts without a parent, or whose parent is not part of the
//! supplied set. Every account must be reached exactly once from a root;
//! anything left over sits on a parent cycle.
//!
//! Trees are built with an explicit stack, so hierarchy depth is bounded by
//! memory rather than by the call stack.

use std::collections::{BTreeMap, HashMap, HashSet};

use neraca_shared::types::{AccountId, round_money};
use rust_decimal::Decimal;

use super::error::ReportError;
use super::types::AccountTreeNode;
use crate::coa::Account;
use crate::ledger::AccountAmount;

/// Traversal step: children are entered before their parent is finished.
enum Step<'a> {
    Enter(&'a Account),
    Finish(&'a Account),
}

/// Builds the account forest for one classification.
///
/// `accounts` is expected to be pre-filtered (active, one classification).
/// Accounts missing from `amounts` contribute zero. Siblings are ordered by
/// code, then id. Every node's `amount` is its own amount plus its
/// children's amounts, rounded to two digits.
///
/// # Errors
///
/// Returns [`ReportError::CyclicHierarchy`] if the parent links form a cycle.
pub fn build_tree(
    accounts: &[Account],
    amounts: &BTreeMap<AccountId, AccountAmount>,
) -> Result<Vec<AccountTreeNode>, ReportError> {
    let mut order: Vec<&Account> = accounts.iter().collect();
    order.sort_by(|a, b| a.code.cmp(&b.code).then(a.id.cmp(&b.id)));

    let present: HashSet<AccountId> = order.iter().map(|a| a.id).collect();

    let mut roots = Vec::new();
    let mut children: HashMap<AccountId, Vec<&Account>> = HashMap::new();
    for &account in &order {
        match account.parent_id {
            Some(parent) if present.contains(&parent) => {
                children.entry(parent).or_default().push(account);
            }
            _ => roots.push(account),
        }
    }

    let mut visited: HashSet<AccountId> = HashSet::with_capacity(order.len());
    // Finished subtrees; siblings sit contiguously, in order, on top
    let mut built: Vec<AccountTreeNode> = Vec::with_capacity(order.len());
    let mut stack: Vec<Step<'_>> = roots.iter().rev().map(|&r| Step::Enter(r)).collect();

    while let Some(step) = stack.pop() {
        match step {
            Step::Enter(account) => {
                if !visited.insert(account.id) {
                    return Err(ReportError::CyclicHierarchy {
                        account_id: account.id,
                    });
                }
                stack.push(Step::Finish(account));
                if let Some(kids) = children.get(&account.id) {
                    stack.extend(kids.iter().rev().map(|&c| Step::Enter(c)));
                }
            }
            Step::Finish(account) => {
                let count = children.get(&account.id).map_or(0, Vec::len);
                let nodes = built.split_off(built.len().saturating_sub(count));
                built.push(finish_node(account, amounts, nodes));
            }
        }
    }

    if visited.len() < order.len()
        && let Some(stranded) = order.iter().find(|a| !visited.contains(&a.id))
    {
        return Err(ReportError::CyclicHierarchy {
            account_id: stranded.id,
        });
    }

    Ok(built)
}

fn finish_node(
    account: &Account,
    amounts: &BTreeMap<AccountId, AccountAmount>,
    children: Vec<AccountTreeNode>,
) -> AccountTreeNode {
    let own_amount = round_money(
        amounts
            .get(&account.id)
            .map_or(Decimal::ZERO, |a| a.signed_amount),
    );
    let rolled_up = own_amount + children.iter().map(|n| n.amount).sum::<Decimal>();

    AccountTreeNode {
        id: account.id,
        code: account.code.clone(),
        name: account.name.clone(),
        own_amount,
        amount: round_money(rolled_up),
        children,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::{AccountTotals, Polarity};
    use neraca_shared::types::ClassificationId;
    use rust_decimal_macros::dec;

    fn account(id: i64, parent: Option<i64>, code: &str) -> Account {
        Account {
            id: AccountId::new(id),
            parent_id: parent.map(AccountId::new),
            code: code.to_string(),
            name: format!("Account {code}"),
            is_debit: true,
            classification_id: ClassificationId::new(1),
            is_active: true,
        }
    }

    fn amounts(entries: &[(i64, Decimal)]) -> BTreeMap<AccountId, AccountAmount> {
        entries
            .iter()
            .map(|(id, debit)| {
                (
                    AccountId::new(*id),
                    AccountAmount::resolve(
                        Polarity::DebitNormal,
                        AccountTotals::new(*debit, Decimal::ZERO),
                    ),
                )
            })
            .collect()
    }

    #[test]
    fn test_leaf_amount_equals_own_amount() {
        let tree = build_tree(&[account(1, None, "1000")], &amounts(&[(1, dec!(12.5))])).unwrap();

        assert_eq!(tree.len(), 1);
        assert_eq!(tree[0].own_amount, dec!(12.50));
        assert_eq!(tree[0].amount, dec!(12.50));
        assert!(tree[0].children.is_empty());
    }

    #[test]
    fn test_rolls_up_through_pass_through_parent() {
        let accounts = vec![
            account(1, None, "1000"),
            account(2, Some(1), "1100"),
            account(3, Some(2), "1110"),
            account(4, Some(2), "1120"),
        ];
        let tree = build_tree(&accounts, &amounts(&[(3, dec!(10)), (4, dec!(5)), (1, dec!(1))]))
            .unwrap();

        let root = &tree[0];
        assert_eq!(root.own_amount, dec!(1));
        assert_eq!(root.amount, dec!(16));
        let middle = &root.children[0];
        assert_eq!(middle.own_amount, Decimal::ZERO);
        assert_eq!(middle.amount, dec!(15));
        assert_eq!(middle.children.len(), 2);
    }

    #[test]
    fn test_siblings_sorted_by_code() {
        let accounts = vec![
            account(3, None, "3000"),
            account(1, None, "1000"),
            account(2, Some(1), "1200"),
            account(5, Some(1), "1100"),
        ];
        let tree = build_tree(&accounts, &BTreeMap::new()).unwrap();

        let root_codes: Vec<&str> = tree.iter().map(|n| n.code.as_str()).collect();
        assert_eq!(root_codes, vec!["1000", "3000"]);
        let child_codes: Vec<&str> = tree[0].children.iter().map(|n| n.code.as_str()).collect();
        assert_eq!(child_codes, vec!["1100", "1200"]);
    }

    #[test]
    fn test_parent_outside_subset_becomes_root() {
        let accounts = vec![account(2, Some(99), "4100"), account(3, Some(2), "4110")];
        let tree = build_tree(&accounts, &amounts(&[(3, dec!(8))])).unwrap();

        assert_eq!(tree.len(), 1);
        assert_eq!(tree[0].id, AccountId::new(2));
        assert_eq!(tree[0].amount, dec!(8));
    }

    #[test]
    fn test_empty_input_builds_empty_forest() {
        assert!(build_tree(&[], &BTreeMap::new()).unwrap().is_empty());
    }

    #[test]
    fn test_two_node_cycle_is_rejected() {
        let accounts = vec![
            account(1, None, "1000"),
            account(2, Some(3), "2000"),
            account(3, Some(2), "3000"),
        ];
        let err = build_tree(&accounts, &BTreeMap::new()).unwrap_err();

        assert!(matches!(
            err,
            ReportError::CyclicHierarchy { account_id } if account_id == AccountId::new(2)
        ));
    }

    #[test]
    fn test_deep_chain_does_not_exhaust_the_stack() {
        const DEPTH: i64 = 10_000;
        let accounts: Vec<Account> = (1..=DEPTH)
            .map(|id| account(id, (id > 1).then(|| id - 1), &format!("{id:05}")))
            .collect();

        let tree = build_tree(&accounts, &amounts(&[(DEPTH, dec!(2.50))])).unwrap();

        assert_eq!(tree.len(), 1);
        let mut node = &tree[0];
        let mut depth = 1;
        while let Some(child) = node.children.first() {
            assert_eq!(node.amount, dec!(2.50));
            assert_eq!(node.children.len(), 1);
            node = child;
            depth += 1;
        }
        assert_eq!(depth, DEPTH);
        assert_eq!(node.id, AccountId::new(DEPTH));
        assert_eq!(node.own_amount, dec!(2.50));
    }

    #[test]
    fn test_cycle_hanging_off_a_deep_chain_is_rejected() {
        let mut accounts: Vec<Account> = (1..=2_000)
            .map(|id| account(id, (id > 1).then(|| id - 1), &format!("{id:05}")))
            .collect();
        accounts.push(account(9_001, Some(9_002), "90001"));
        accounts.push(account(9_002, Some(9_001), "90002"));

        let err = build_tree(&accounts, &BTreeMap::new()).unwrap_err();

        assert!(matches!(
            err,
            ReportError::CyclicHierarchy { account_id } if account_id == AccountId::new(9_001)
        ));
    }

    #[test]
    fn test_self_parent_is_rejected() {
        let err = build_tree(&[account(7, Some(7), "7000")], &BTreeMap::new()).unwrap_err();

        assert!(matches!(
            err,
            ReportError::CyclicHierarchy { account_id } if account_id == AccountId::new(7)
        ));
    }
}
