/// Returns the name of `T` with all module paths stripped, keeping generic arguments.
///
/// For example, `Maybe<Vec<String>>` instead of
/// `maybe_core::maybe::Maybe<alloc::vec::Vec<alloc::string::String>>`.
pub fn short_type_name<T: ?Sized>() -> String {
  strip_paths(std::any::type_name::<T>())
}

/// Returns the [short type name](short_type_name) of the type of `_value`.
#[inline]
pub fn short_type_name_of_val<T: ?Sized>(_value: &T) -> String {
  short_type_name::<T>()
}

fn strip_paths(full_name: &str) -> String {
  let mut name = String::with_capacity(full_name.len());
  // Index into `name` where the current path began; a `::` truncates back to it.
  let mut path_start = 0;
  let mut chars = full_name.chars().peekable();
  while let Some(c) = chars.next() {
    match c {
      ':' if chars.peek() == Some(&':') => {
        chars.next();
        name.truncate(path_start);
      }
      c if c.is_alphanumeric() || c == '_' || c == '{' || c == '}' => name.push(c),
      c => {
        name.push(c);
        path_start = name.len();
      }
    }
  }
  name
}
