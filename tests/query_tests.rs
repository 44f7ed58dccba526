use growvec::GrowVec;

#[test]
fn test_index_of_finds_first_match() {
    let letters: GrowVec<char> = ['a', 'b', 'a', 'c'].into_iter().collect();

    assert_eq!(letters.index_of(&'a'), Some(0));
    assert_eq!(letters.index_of(&'c'), Some(3));
    assert_eq!(letters.index_of(&'z'), None);
}

#[test]
fn test_last_index_of_scans_backward() {
    let letters: GrowVec<char> = ['a', 'b', 'a', 'c'].into_iter().collect();

    assert_eq!(letters.last_index_of(&'a'), Some(2));
    assert_eq!(letters.last_index_of(&'b'), Some(1));
    assert_eq!(letters.last_index_of(&'z'), None);
}

#[test]
fn test_last_index_of_in_window() {
    let letters: GrowVec<char> = ['a', 'b', 'a', 'c'].into_iter().collect();

    // window [0..=1]: only the first 'a' is visible
    assert_eq!(letters.last_index_of_in(&'a', 1, 2).unwrap(), Some(0));
    // window [1..=2]: the second 'a'
    assert_eq!(letters.last_index_of_in(&'a', 2, 2).unwrap(), Some(2));
    // window [3..=3]: no 'a'
    assert_eq!(letters.last_index_of_in(&'a', 3, 1).unwrap(), None);
}

#[test]
fn test_last_index_of_in_validation() {
    let letters: GrowVec<char> = ['a', 'b'].into_iter().collect();

    assert!(letters.last_index_of_in(&'a', 2, 1).is_err());
    assert!(letters.last_index_of_in(&'a', 1, 3).is_err());

    // an empty vector skips validation entirely
    let empty: GrowVec<char> = GrowVec::new();
    assert_eq!(empty.last_index_of_in(&'a', 5, 5).unwrap(), None);
}

#[test]
fn test_contains_uses_equality() {
    let names: GrowVec<&str> = ["ada", "grace"].into_iter().collect();

    assert!(names.contains(&"ada"));
    assert!(!names.contains(&"edsger"));
}

#[test]
fn test_sort_orders_ascending() {
    let mut numbers: GrowVec<i32> = [5, 1, 4, 2, 3].into_iter().collect();

    numbers.sort();

    assert_eq!(numbers.to_vec(), vec![1, 2, 3, 4, 5]);
}

#[test]
fn test_sort_by_custom_ordering() {
    let mut numbers: GrowVec<i32> = [5, 1, 4, 2, 3].into_iter().collect();

    numbers.sort_by(|a, b| b.cmp(a));

    assert_eq!(numbers.to_vec(), vec![5, 4, 3, 2, 1]);
}

#[test]
fn test_sort_range_by_leaves_rest_untouched() {
    let mut numbers: GrowVec<i32> = [9, 3, 1, 2, 0].into_iter().collect();

    numbers.sort_range_by(1, 3, i32::cmp).unwrap();

    assert_eq!(numbers.to_vec(), vec![9, 1, 2, 3, 0]);
}

#[test]
fn test_sort_range_by_validation() {
    let mut numbers: GrowVec<i32> = (0..3).collect();

    assert!(numbers.sort_range_by(1, 3, i32::cmp).is_err());
}

#[test]
fn test_reverse_whole_vector() {
    let mut numbers: GrowVec<i32> = (1..=4).collect();

    numbers.reverse();

    assert_eq!(numbers.to_vec(), vec![4, 3, 2, 1]);
}

#[test]
fn test_reverse_range_in_place() {
    let mut numbers: GrowVec<i32> = (1..=5).collect();

    numbers.reverse_range(1, 3).unwrap();

    assert_eq!(numbers.to_vec(), vec![1, 4, 3, 2, 5]);
}

#[test]
fn test_reverse_range_validation() {
    let mut numbers: GrowVec<i32> = (1..=3).collect();

    assert!(numbers.reverse_range(2, 2).is_err());
    assert_eq!(numbers.to_vec(), vec![1, 2, 3]);
}

#[test]
fn test_binary_search_on_sorted_vector() {
    let numbers: GrowVec<i32> = [1, 3, 5, 7].into_iter().collect();

    assert_eq!(numbers.binary_search(&5), Ok(2));
    assert_eq!(numbers.binary_search(&4), Err(2));
}

#[test]
fn test_binary_search_by_comparator() {
    let numbers: GrowVec<i32> = [1, 3, 5, 7].into_iter().collect();

    assert_eq!(numbers.binary_search_by(|n| n.cmp(&7)), Ok(3));
}

#[test]
fn test_to_vec_is_independent() {
    let mut numbers: GrowVec<i32> = (1..=3).collect();

    let mut copied = numbers.to_vec();
    copied.push(4);
    numbers.pop();

    assert_eq!(copied, vec![1, 2, 3, 4]);
    assert_eq!(numbers.to_vec(), vec![1, 2]);
}

#[test]
fn test_as_slice_views_logical_window() {
    let mut numbers: GrowVec<i32> = GrowVec::with_capacity(10);
    numbers.push(1);
    numbers.push(2);

    assert_eq!(numbers.as_slice(), &[1, 2]);

    numbers.as_mut_slice()[0] = 10;
    assert_eq!(numbers.as_slice(), &[10, 2]);
}
