use furrow::{BinarySearchTree, MenuItem, MenuTree, Tree};
use std::cmp::Ordering;

#[test]
fn test_tree_traversals_report_depth() {
    let mut tree = Tree::with_root("farm");
    let root = tree.root().unwrap();
    let fields = tree.add_child(root, "fields").unwrap();
    let barn = tree.add_child(root, "barn").unwrap();
    tree.add_child(fields, "north").unwrap();
    tree.add_child(fields, "south").unwrap();
    tree.add_child(barn, "loft").unwrap();

    let mut dfs = Vec::new();
    tree.traverse_dfs(|v, d| dfs.push((*v, d)));
    assert_eq!(
        dfs,
        vec![
            ("farm", 0),
            ("fields", 1),
            ("north", 2),
            ("south", 2),
            ("barn", 1),
            ("loft", 2)
        ]
    );

    let mut bfs = Vec::new();
    tree.traverse_bfs(|v, _| bfs.push(*v));
    assert_eq!(bfs, vec!["farm", "fields", "barn", "north", "south", "loft"]);

    assert_eq!(tree.height(), 3);
    assert_eq!(tree.leaf_values(), vec![&"north", &"south", &"loft"]);
    assert_eq!(tree.find(&"loft").and_then(|n| tree.parent(n)), Some(barn));
    assert!(tree.validate_invariants());
}

#[test]
fn test_tree_remove_subtree() {
    let mut tree = Tree::with_root(0);
    let root = tree.root().unwrap();
    let a = tree.add_child(root, 1).unwrap();
    let b = tree.add_child(a, 2).unwrap();
    tree.add_child(root, 3).unwrap();

    assert_eq!(tree.remove_subtree(a), Some(1));
    assert_eq!(tree.len(), 2);
    assert!(!tree.contains_node(b));
    assert_eq!(tree.add_child(b, 9), None);
    assert_eq!(tree.height(), 2);
    assert!(tree.validate_invariants());
}

#[test]
fn test_empty_tree() {
    let tree: Tree<u8> = Tree::new();
    let mut calls = 0;
    tree.traverse_dfs(|_, _| calls += 1);
    tree.traverse_bfs(|_, _| calls += 1);
    assert_eq!(calls, 0);
    assert_eq!(tree.height(), 0);
    assert!(tree.leaves().is_empty());
}

#[test]
fn test_bst_sorted_and_bounds() {
    let tree: BinarySearchTree<_> = [50, 30, 70, 20, 40, 60, 80, 30].into_iter().collect();
    assert_eq!(tree.to_sorted_vec(), vec![20, 30, 30, 40, 50, 60, 70, 80]);
    assert_eq!(tree.find_min(), Some(&20));
    assert_eq!(tree.find_max(), Some(&80));
    assert!(tree.search(&60));
    assert!(!tree.search(&65));
    assert_eq!(tree.height(), 4);

    let empty: BinarySearchTree<i32> = BinarySearchTree::new();
    assert_eq!(empty.find_min(), None);
    assert_eq!(empty.find_max(), None);
    assert!(!empty.search(&1));
}

#[test]
fn test_bst_comparator_orders_records() {
    #[derive(Debug, Clone, PartialEq)]
    struct Offer {
        store: &'static str,
        price: f64,
    }

    let mut tree =
        BinarySearchTree::with_comparator(|a: &Offer, b: &Offer| a.price.total_cmp(&b.price));
    tree.insert(Offer { store: "a", price: 12.5 });
    tree.insert(Offer { store: "b", price: 9.0 });
    tree.insert(Offer { store: "c", price: 15.0 });

    assert_eq!(tree.find_min().map(|o| o.store), Some("b"));
    let stores: Vec<_> = tree.iter().map(|o| o.store).collect();
    assert_eq!(stores, vec!["b", "a", "c"]);

    let mut desc =
        BinarySearchTree::with_comparator(|a: &i32, b: &i32| -> Ordering { b.cmp(a) });
    for x in [1, 3, 2] {
        desc.insert(x);
    }
    assert_eq!(desc.to_sorted_vec(), vec![3, 2, 1]);
}

#[test]
fn test_bst_remove() {
    let mut tree: BinarySearchTree<_> = [8, 3, 10, 1, 6, 14, 4, 7, 13].into_iter().collect();
    assert!(tree.remove(&3));
    assert!(tree.remove(&14));
    assert!(tree.remove(&8));
    assert!(!tree.remove(&8));
    assert_eq!(tree.to_sorted_vec(), vec![1, 4, 6, 7, 10, 13]);
    assert_eq!(tree.len(), 6);
}

#[test]
fn test_menu_role_filter() {
    let json = r#"[
        {"id": "home", "label": "Home", "path": "/", "roles": ["farmer", "buyer"]},
        {"id": "my-crops", "label": "My crops", "path": "/crops", "roles": ["farmer"],
         "children": [
            {"id": "add-crop", "label": "Add crop", "path": "/crops/new", "roles": ["farmer"]}
         ]},
        {"id": "cart", "label": "Cart", "path": "/cart", "roles": ["buyer"]}
    ]"#;
    let mut menu = MenuTree::from_json(json).unwrap();
    assert!(menu.add_menu_item(
        "my-crops",
        MenuItem::new("harvests", "Harvests").with_roles(["farmer", "buyer"])
    ));

    let farmer: Vec<_> = menu.menu_for_role("farmer").into_iter().map(|i| i.id).collect();
    assert_eq!(farmer, vec!["home", "my-crops"]);

    let buyer = menu.menu_for_role("buyer");
    let buyer_ids: Vec<_> = buyer.iter().map(|i| i.id.as_str()).collect();
    assert_eq!(buyer_ids, vec!["home", "cart"]);

    assert_eq!(menu.breadcrumbs("harvests"), vec!["My crops", "Harvests"]);
    assert_eq!(menu.len(), 5);
}
