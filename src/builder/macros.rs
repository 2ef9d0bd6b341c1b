//! Macros for ergonomic state machine construction.

/// Generate a closed state set from a list of state types.
///
/// Each listed type becomes an enum arm of the same name. The macro
/// implements `StateSet`, `Contains<S>` and `From<S>` for every member, and
/// `Accepts<E>` for every event kind in the optional `events` block. An
/// accepted event reaches whichever active state implements `HandleEvent`
/// for it; every other state ignores it. Event kinds outside the block are
/// ignored by all states.
///
/// `data` sets the host data type and defaults to `()`.
///
/// # Example
///
/// ```
/// use hookstate::{state_machine, Event, Handle, HandleEvent, State};
///
/// #[derive(Default)]
/// struct Idle;
///
/// #[derive(Default)]
/// struct Busy;
///
/// #[derive(Default)]
/// struct Go;
///
/// #[derive(Default)]
/// struct Ping;
///
/// impl Event for Go {}
/// impl Event for Ping {}
///
/// state_machine! {
///     enum Worker {
///         Idle,
///         Busy,
///     }
///     data: u32;
///     events {
///         Go,
///         Ping,
///     }
/// }
///
/// impl State<Worker> for Idle {}
/// impl State<Worker> for Busy {}
///
/// impl HandleEvent<Go, Worker> for Idle {
///     fn handle_event(&mut self, _event: &Go, machine: &mut Handle<'_, Worker>) {
///         machine.go_state::<Busy>().unwrap();
///     }
/// }
/// ```
#[macro_export]
macro_rules! state_machine {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),+ $(,)?
        }

        $(data: $data:ty;)?

        $(events {
            $($event:ty),* $(,)?
        })?
    ) => {
        $(#[$meta])*
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant($variant)
            ),+
        }

        impl $crate::StateSet for $name {
            type Data = $crate::__state_machine_data!($($data)?);

            fn name(&self) -> &'static str {
                match self {
                    $(Self::$variant(_) => stringify!($variant)),+
                }
            }

            fn active_type(&self) -> ::std::any::TypeId {
                match self {
                    $(Self::$variant(_) => ::std::any::TypeId::of::<$variant>()),+
                }
            }

            fn enter(&mut self, machine: &mut $crate::Handle<'_, Self>) {
                match self {
                    $(Self::$variant(state) => $crate::State::<Self>::enter(state, machine)),+
                }
            }

            fn exit(&mut self, machine: &mut $crate::Handle<'_, Self>) {
                match self {
                    $(Self::$variant(state) => $crate::State::<Self>::exit(state, machine)),+
                }
            }

            fn route(
                &mut self,
                event: &dyn ::std::any::Any,
                machine: &mut $crate::Handle<'_, Self>,
            ) -> bool {
                $crate::__state_machine_route!(
                    self, event, machine, [$($variant),+] $($(, $event)*)?
                )
            }
        }

        $(
            impl $crate::Contains<$variant> for $name {
                const NAME: &'static str = stringify!($variant);

                fn wrap(state: $variant) -> Self {
                    Self::$variant(state)
                }

                fn get(&self) -> Option<&$variant> {
                    match self {
                        Self::$variant(state) => Some(state),
                        #[allow(unreachable_patterns)]
                        _ => None,
                    }
                }

                fn get_mut(&mut self) -> Option<&mut $variant> {
                    match self {
                        Self::$variant(state) => Some(state),
                        #[allow(unreachable_patterns)]
                        _ => None,
                    }
                }
            }

            impl From<$variant> for $name {
                fn from(state: $variant) -> Self {
                    Self::$variant(state)
                }
            }
        )+

        $($(
            impl $crate::Accepts<$event> for $name {}
        )*)?
    };
}

/// Host data type of `state_machine!`, `()` when omitted.
#[doc(hidden)]
#[macro_export]
macro_rules! __state_machine_data {
    () => {
        ()
    };
    ($data:ty) => {
        $data
    };
}

/// Body of the generated `StateSet::route`: downcast to each accepted kind,
/// then offer it to the active arm.
#[doc(hidden)]
#[macro_export]
macro_rules! __state_machine_route {
    (@kind $this:ident, $event:ident, $machine:ident, $kind:ty, [$($variant:ident),+]) => {{
        #[allow(unused_imports)]
        use $crate::__private::{HandledRoute as _, IgnoredRoute as _};
        match $this {
            $(
                Self::$variant(state) => {
                    $crate::__private::Route::<$variant, $kind, Self>::new(state)
                        .route($event, $machine)
                }
            )+
        }
    }};
    ($this:ident, $event:ident, $machine:ident, $states:tt $(, $kind:ty)*) => {{
        $(
            if let Some(event) = $event.downcast_ref::<$kind>() {
                return $crate::__state_machine_route!(@kind $this, event, $machine, $kind, $states);
            }
        )*
        let _ = ($event, $machine);
        false
    }};
}
