//! End-to-end scenarios exercising the volume API the way calling code
//! composes it, including the panic contracts for precondition violations.

use cuboid::{transform, CellEq, Volume};

#[test]
fn sequential_fill_then_slice_extracts_expected_block() {
    let mut vol: Volume<i32> = Volume::with_dims(2, 5, 5);
    vol.fill_from(0..50);

    let sub = vol.slice(1, 1, 0, 1, 0, 2);
    assert_eq!((sub.depth(), sub.height(), sub.width()), (1, 2, 3));
    assert_eq!(sub.as_slice(), &[30, 31, 32, 35, 36, 37]);

    // The slice is independently owned: mutating it leaves the source alone.
    let mut sub = sub;
    *sub.at_mut(0, 0, 0) = -1;
    assert_eq!(*vol.at(1, 0, 0), 30);
}

#[test]
fn single_cell_overwrite_leaves_neighbours_untouched() {
    let mut vol: Volume<char> = Volume::filled(1, 10, 20, 'f');
    *vol.at_mut(0, 4, 7) = 'x';

    assert_eq!(*vol.at(0, 4, 7), 'x');
    for (p, r, c) in vol.coords() {
        if (p, r, c) != (0, 4, 7) {
            assert_eq!(*vol.at(p, r, c), 'f');
        }
    }
}

#[test]
fn cast_to_narrow_type_truncates_per_standard_conversion() {
    let mut wide: Volume<i64> = Volume::with_dims(1, 2, 2);
    wide.fill_from([102i64, 300, 67, 1000]);

    let narrow: Volume<u8> = wide.cast();
    assert_eq!((narrow.depth(), narrow.height(), narrow.width()), (1, 2, 2));
    // The test asserts the truncated values, not the originals.
    assert_eq!(narrow.as_slice(), &[102, 44, 67, 232]);
}

#[test]
fn transform_feeds_volumes_of_user_defined_types() {
    #[derive(Clone, Debug, Default, PartialEq)]
    struct Sample {
        id: i32,
        tag: char,
    }

    let mut ids: Volume<i32> = Volume::with_dims(2, 2, 2);
    ids.fill_from(0..8);

    let samples: Volume<Sample> = transform(&ids, |&id| Sample { id, tag: 's' });
    assert_eq!((samples.depth(), samples.height(), samples.width()), (2, 2, 2));
    for (p, r, c) in samples.coords() {
        assert_eq!(samples.at(p, r, c).id, *ids.at(p, r, c));
        assert_eq!(samples.at(p, r, c).tag, 's');
    }
}

#[test]
fn custom_strategy_changes_comparison_outcome() {
    #[derive(Clone, Copy, Debug, Default)]
    struct IgnoreCase;

    impl CellEq<char> for IgnoreCase {
        fn eq(&self, a: &char, b: &char) -> bool {
            a.eq_ignore_ascii_case(b)
        }
    }

    let lower: Volume<char> = Volume::filled(1, 2, 2, 'k');
    let upper: Volume<char> = Volume::filled(1, 2, 2, 'K');
    assert!(lower != upper);

    let lower = lower.with_strategy(IgnoreCase);
    let upper = upper.with_strategy(IgnoreCase);
    assert!(lower == upper);
}

#[test]
fn assignment_by_clone_is_deep() {
    let mut original: Volume<String> = Volume::filled(1, 2, 2, "cell".to_string());
    let copy = original.clone();
    assert!(copy == original);

    original.at_mut(0, 1, 1).push('!');
    assert!(copy != original);
    assert_eq!(copy.at(0, 1, 1), "cell");
}

#[test]
fn rendering_matches_canonical_layout() {
    let mut vol: Volume<u8> = Volume::with_dims(1, 2, 2);
    vol.fill_from([1u8, 2, 3, 4]);
    assert_eq!(
        vol.to_string(),
        "rows: 2\ncolumns: 2\nplanes: 1\nplane 1:\n1 2\n3 4\n"
    );
}

#[test]
#[should_panic(expected = "out of bounds")]
fn reading_past_the_last_plane_panics() {
    let vol: Volume<i32> = Volume::filled(2, 3, 3, 0);
    let _ = vol.at(2, 0, 0);
}

#[test]
#[should_panic(expected = "out of bounds")]
fn indexing_sugar_enforces_the_same_contract() {
    let vol: Volume<i32> = Volume::filled(2, 3, 3, 0);
    let _ = vol[(0, 0, 3)];
}

#[test]
#[should_panic(expected = "out of bounds")]
fn slice_bounds_must_lie_within_the_volume() {
    let vol: Volume<i32> = Volume::filled(2, 3, 3, 0);
    let _ = vol.slice(0, 1, 0, 3, 0, 2);
}

#[test]
#[should_panic(expected = "dimensions must all be positive")]
fn zero_width_construction_panics() {
    let _: Volume<i32> = Volume::filled(1, 1, 0, 0);
}

#[test]
#[should_panic(expected = "different dimensions")]
fn comparing_a_volume_with_its_own_slice_panics_on_shape() {
    let vol: Volume<i32> = Volume::filled(2, 2, 2, 0);
    let sub = vol.slice(0, 0, 0, 1, 0, 1);
    let _ = vol == sub;
}
