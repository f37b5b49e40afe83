/// Build a [`SelectionSet`](crate::operation::SelectionSet) from GraphQL-like
/// syntax.
///
/// Selections are separated by commas. Each is a field name, optionally
/// preceded by `alias:`, optionally followed by `(name: value, ...)`
/// arguments (any expression convertible into [`Value`](crate::Value)), and
/// optionally followed by a nested `{ ... }` selection.
///
/// ```ignore
/// let set = selection! {
///     dog {
///         name,
///         owner: knows(command: Value::enum_value("SIT")),
///     },
///     search(term: "rex", limit: 5),
/// };
/// ```
#[macro_export]
macro_rules! selection {
    ($($items:tt)*) => {
        $crate::__selection_items!(
            @munch $crate::operation::SelectionSet::new();
            $($items)*
        )
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __selection_items {
    (@munch $set:expr; ) => { $set };

    (@munch $set:expr;
        $alias:ident : $name:ident
        $(( $($arg:ident : $value:expr),* $(,)? ))?
        $({ $($sub:tt)* })?
        $(, $($rest:tt)*)?
    ) => {
        $crate::__selection_items!(
            @munch $set.push(
                $crate::operation::FieldSelection::new(stringify!($name))
                    .with_alias(stringify!($alias))
                    $($(.with_argument(stringify!($arg), $value))*)?
                    $(.with_selection_set($crate::selection!($($sub)*)))?
            );
            $($($rest)*)?
        )
    };

    (@munch $set:expr;
        $name:ident
        $(( $($arg:ident : $value:expr),* $(,)? ))?
        $({ $($sub:tt)* })?
        $(, $($rest:tt)*)?
    ) => {
        $crate::__selection_items!(
            @munch $set.push(
                $crate::operation::FieldSelection::new(stringify!($name))
                    $($(.with_argument(stringify!($arg), $value))*)?
                    $(.with_selection_set($crate::selection!($($sub)*)))?
            );
            $($($rest)*)?
        )
    };
}
