use super::*;

#[test]
fn test_new_field_is_zeroed() {
  let field = VoxelField::new(4);
  assert_eq!(field.size(), 4);
  assert_eq!(field.as_slice().len(), 64);
  assert!(field.as_slice().iter().all(|&v| v == 0.0));
}

#[test]
fn test_set_then_get() {
  let mut field = VoxelField::new(5);
  field.set(1, 2, 3, 0.75);
  assert_eq!(field.get(1, 2, 3), 0.75);
  assert_eq!(field.as_slice()[1 + 2 * 5 + 3 * 25], 0.75);
}

#[test]
fn test_out_of_range_write_is_noop() {
  let mut field = VoxelField::new(3);
  field.set(-1, 0, 0, 1.0);
  field.set(0, 3, 0, 1.0);
  field.set(0, 0, 99, 1.0);
  assert!(field.as_slice().iter().all(|&v| v == 0.0));
}

#[test]
fn test_out_of_range_read_is_zero() {
  let mut field = VoxelField::new(3);
  field.as_mut_slice().fill(2.0);
  assert_eq!(field.get(-1, 0, 0), 0.0);
  assert_eq!(field.get(0, -1, 0), 0.0);
  assert_eq!(field.get(0, 0, 3), 0.0);
  assert_eq!(field.get(2, 2, 2), 2.0);
}

#[test]
fn test_zero_size_field() {
  let mut field = VoxelField::new(0);
  field.set(0, 0, 0, 1.0);
  assert_eq!(field.get(0, 0, 0), 0.0);
  assert_eq!(field.max_value(), 0.0);
}

#[test]
fn test_max_and_count() {
  let mut field = VoxelField::new(4);
  field.set(0, 0, 0, 0.5);
  field.set(3, 3, 3, 1.5);
  assert_eq!(field.max_value(), 1.5);
  assert_eq!(field.count_above(0.0), 2);
  assert_eq!(field.count_above(1.0), 1);
}
