//! Property-based tests for argument parsing and teardown pairing.
//!
//! Uses `proptest` to verify invariants across many random inputs.

#![allow(clippy::expect_used)]

use proptest::prelude::*;

use methods_enabler::application::services::methods_enabler::{Outcome, enable_methods};
use methods_enabler::cli::{MIN_ARGS, UsageError, parse};

use crate::mocks::{Call, FakeDiskLib, RecordingReporter, config};

// ============================================================================
// parse() property tests
// ============================================================================

fn token() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("-host".to_string()),
        Just("-user".to_string()),
        Just("-password".to_string()),
        Just("-vm".to_string()),
        Just("-disableMethods".to_string()),
        "[a-zA-Z0-9=.-]{1,16}",
    ]
}

proptest! {
    /// Fewer than seven tokens is always a usage error.
    #[test]
    fn prop_short_argument_lists_rejected(tokens in prop::collection::vec(token(), 0..MIN_ARGS)) {
        let result = parse(tokens);
        prop_assert!(
            matches!(result, Err(UsageError::TooFewArguments(_))),
            "accepted short list: {:?}", result
        );
    }

    /// Leaving out any of -host/-user/-password is always rejected, whatever
    /// else is supplied.
    #[test]
    fn prop_missing_credential_flag_rejected(
        omit in 0usize..3,
        values in prop::collection::vec("[a-z0-9=.-]{1,12}", 4),
        disable_count in 0usize..4,
    ) {
        let flags = ["-host", "-user", "-password", "-vm"];
        let mut args = vec!["lazy-methods-enabler".to_string()];
        for (i, (flag, value)) in flags.iter().zip(&values).enumerate() {
            if i != omit {
                args.push((*flag).to_string());
                args.push(value.clone());
            }
        }
        args.extend(std::iter::repeat_n("-disableMethods".to_string(), disable_count));

        prop_assert!(parse(args).is_err());
    }

    /// Any non-empty values round-trip through the single-dash grammar.
    #[test]
    fn prop_values_are_taken_verbatim(
        host in "[a-z0-9.-]{1,20}",
        user in "[a-zA-Z0-9@\\\\.-]{1,20}",
        password in "[ -~]{1,20}",
        vm in "moid=vm-[0-9]{1,5}",
    ) {
        let args = [
            "prog", "-host", host.as_str(), "-user", user.as_str(),
            "-password", password.as_str(), "-vm", vm.as_str(),
        ];
        let cfg = parse(args).expect("valid arguments");
        prop_assert_eq!(cfg.host, host);
        prop_assert_eq!(cfg.user_name, user);
        prop_assert_eq!(cfg.password, password);
        prop_assert_eq!(cfg.vm_spec, vm);
        prop_assert_eq!(cfg.port, 902);
    }
}

// ============================================================================
// enable_methods() teardown property tests
// ============================================================================

proptest! {
    /// Disconnect happens iff connect succeeded, exit iff init succeeded,
    /// disconnect always precedes exit, and the outcome is a failure iff
    /// init, prepare or connect failed.
    #[test]
    fn prop_teardown_matches_acquisitions(
        fail_init in any::<bool>(),
        fail_prepare in any::<bool>(),
        fail_connect in any::<bool>(),
        fail_end in any::<bool>(),
        fail_disconnect in any::<bool>(),
        disable_methods in any::<bool>(),
    ) {
        let mut lib = FakeDiskLib::new();
        for (fail, call) in [
            (fail_init, Call::Init),
            (fail_prepare, Call::PrepareForAccess),
            (fail_connect, Call::Connect),
            (fail_end, Call::EndAccess),
            (fail_disconnect, Call::Disconnect),
        ] {
            if fail {
                lib = lib.failing(call, 1, "Unknown error");
            }
        }

        let outcome = enable_methods(&config(disable_methods), &lib, &RecordingReporter::default());
        let calls = lib.calls();

        let initialized = !fail_init;
        let connected = initialized && !fail_prepare && !fail_connect;
        let ended = initialized && !disable_methods;

        prop_assert_eq!(calls.contains(&Call::Exit), initialized);
        prop_assert_eq!(calls.contains(&Call::Disconnect), connected);
        prop_assert_eq!(calls.contains(&Call::EndAccess), ended);
        prop_assert!(calls.iter().filter(|c| **c == Call::Disconnect).count() <= 1);
        prop_assert!(calls.iter().filter(|c| **c == Call::Exit).count() <= 1);

        if let (Some(d), Some(e)) = (
            calls.iter().position(|c| *c == Call::Disconnect),
            calls.iter().position(|c| *c == Call::Exit),
        ) {
            prop_assert!(d < e, "disconnect after exit: {:?}", calls);
        }

        prop_assert_eq!(outcome == Outcome::Failure, !connected);
    }
}
