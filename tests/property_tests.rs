use bomcalc::*;
use proptest::prelude::*;

const ITEMS: usize = 6;

fn item(index: usize) -> String {
    format!("test:item_{index}")
}

/// `(output item, output count, [(input item, input count)])`
type RecipeSpec = (usize, u64, Vec<(usize, u64)>);

fn recipe_spec() -> impl Strategy<Value = RecipeSpec> {
    (
        0..ITEMS,
        1..=5u64,
        prop::collection::vec((0..ITEMS, 1..=3u64), 1..=3),
    )
}

fn build_book(specs: &[RecipeSpec]) -> RecipeBook {
    specs
        .iter()
        .map(|(output, count, inputs)| {
            Recipe::new(
                inputs
                    .iter()
                    .map(|(i, n)| ItemGroup::single(ItemStack::new(item(*i), *n)))
                    .collect(),
                vec![ItemGroup::single(ItemStack::new(item(*output), *count))],
            )
        })
        .collect()
}

fn groups(specs: &[(usize, u64)]) -> Vec<ItemGroup> {
    specs
        .iter()
        .map(|(i, n)| ItemGroup::single(ItemStack::new(item(*i), *n)))
        .collect()
}

proptest! {
    /// Arbitrary, possibly cyclic, recipe graphs always resolve.
    #[test]
    fn prop_decomposition_terminates(
        specs in prop::collection::vec(recipe_spec(), 0..10),
        inputs in prop::collection::vec((0..ITEMS, 1..=3u64), 0..4),
        crafted in 0..ITEMS,
    ) {
        let decomposer = Decomposer::with_rules(build_book(&specs), Rules::permissive());
        let crafted = ItemGroup::single(ItemStack::new(item(crafted), 1));

        let bom = decomposer.decompose(&groups(&inputs), &crafted);

        prop_assert!(bom.tree.depth() <= MAX_PATH_LEN + 1);
        prop_assert!(bom.ingredients.iter().all(|g| g.count() > 0));
    }

    /// Every base ingredient appears once.
    #[test]
    fn prop_ingredients_are_distinct(
        specs in prop::collection::vec(recipe_spec(), 0..10),
        inputs in prop::collection::vec((0..ITEMS, 1..=3u64), 0..4),
    ) {
        let decomposer = Decomposer::with_rules(build_book(&specs), Rules::permissive());
        let crafted = ItemGroup::single(ItemStack::new("test:top", 1));

        let bom = decomposer.decompose(&groups(&inputs), &crafted);

        for (i, a) in bom.ingredients.iter().enumerate() {
            for b in &bom.ingredients[i + 1..] {
                prop_assert!(!a.same_ingredient(b, &ExactMatch));
            }
        }
    }

    /// Same recipe data, same inputs, same bill.
    #[test]
    fn prop_decomposition_is_deterministic(
        specs in prop::collection::vec(recipe_spec(), 0..10),
        inputs in prop::collection::vec((0..ITEMS, 1..=3u64), 0..4),
    ) {
        let decomposer = Decomposer::with_rules(build_book(&specs), Rules::permissive());
        let crafted = ItemGroup::single(ItemStack::new("test:top", 1));

        let first = decomposer.decompose(&groups(&inputs), &crafted);
        let second = decomposer.decompose(&groups(&inputs), &crafted);

        prop_assert_eq!(first.ingredients, second.ingredients);
        prop_assert_eq!(first.leftovers, second.leftovers);
        prop_assert_eq!(first.tree.len(), second.tree.len());
    }

    /// Merging a list twice doubles each total and adds no entries.
    #[test]
    fn prop_merge_twice_doubles(
        list in prop::collection::vec((0..ITEMS, 1..=50u64), 0..12),
    ) {
        let list = groups(&list);

        let mut once = Vec::new();
        merge_all(&mut once, &list, &ExactMatch);

        let mut twice = Vec::new();
        merge_all(&mut twice, &list, &ExactMatch);
        merge_all(&mut twice, &list, &ExactMatch);

        prop_assert_eq!(once.len(), twice.len());
        for (a, b) in once.iter().zip(&twice) {
            prop_assert!(a.same_ingredient(b, &ExactMatch));
            prop_assert_eq!(a.count() * 2, b.count());
        }
    }
}
