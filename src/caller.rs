//! Invoking the Provider and reporting the results.

use std::io::{self, Write};

use log::{debug, warn};

use crate::arith;
use crate::provider::Provider;

/// How the two calls are scheduled.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Mode {
    /// `double_input` returns before `third_input` is called.
    Sequential,
    /// Both calls run concurrently on the rayon pool.
    Parallel,
}

/// Scalars of one run.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Invocation {
    pub input: i32,
    pub doubled: i32,
    pub tripled: i32,
}

/// Call both Provider functions with `input`.
pub fn invoke<P: Provider + ?Sized>(provider: &P, input: i32, mode: Mode) -> Invocation {
    debug!("Invoking provider with input {} ({:?})", input, mode);

    let (doubled, tripled) = match mode {
        Mode::Sequential => {
            let doubled = provider.double_input(input);
            let tripled = provider.third_input(input);
            (doubled, tripled)
        }
        Mode::Parallel => rayon::join(
            || provider.double_input(input),
            || provider.third_input(input),
        ),
    };

    if arith::overflows(input, 2) {
        warn!("{} * 2 overflows i32, wrapped to {}", input, doubled);
    }
    if arith::overflows(input, 3) {
        warn!("{} * 3 overflows i32, wrapped to {}", input, tripled);
    }

    Invocation {
        input,
        doubled,
        tripled,
    }
}

/// Write the two result lines.
pub fn render<W: Write>(invocation: &Invocation, out: &mut W) -> io::Result<()> {
    writeln!(out, "{} * 2 = {}", invocation.input, invocation.doubled)?;
    writeln!(out, "{} * 3 = {}", invocation.input, invocation.tripled)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::LinkedProvider;
    use std::sync::Mutex;

    /// Records call order, answers like the real exports.
    #[derive(Default)]
    struct Recording {
        calls: Mutex<Vec<&'static str>>,
    }

    impl Provider for Recording {
        fn double_input(&self, input: i32) -> i32 {
            self.calls.lock().unwrap().push("double_input");
            input.wrapping_mul(2)
        }

        fn third_input(&self, input: i32) -> i32 {
            self.calls.lock().unwrap().push("third_input");
            input.wrapping_mul(3)
        }

        fn describe(&self) -> String {
            "recording".to_owned()
        }
    }

    fn rendered(invocation: &Invocation) -> String {
        let mut buf = Vec::new();
        render(invocation, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_reference_run() {
        let invocation = invoke(&LinkedProvider, 4, Mode::Sequential);
        assert_eq!(
            invocation,
            Invocation {
                input: 4,
                doubled: 8,
                tripled: 12
            }
        );
        assert_eq!(rendered(&invocation), "4 * 2 = 8\n4 * 3 = 12\n");
    }

    #[test]
    fn test_zero_input() {
        let invocation = invoke(&LinkedProvider, 0, Mode::Sequential);
        assert_eq!(rendered(&invocation), "0 * 2 = 0\n0 * 3 = 0\n");
    }

    #[test]
    fn test_negative_input() {
        let invocation = invoke(&LinkedProvider, -4, Mode::Sequential);
        assert_eq!(rendered(&invocation), "-4 * 2 = -8\n-4 * 3 = -12\n");
    }

    #[test]
    fn test_overflow_input_renders_wrapped_values() {
        let invocation = invoke(&LinkedProvider, i32::MAX, Mode::Sequential);
        assert_eq!(
            rendered(&invocation),
            "2147483647 * 2 = -2\n2147483647 * 3 = 2147483645\n"
        );
    }

    #[test]
    fn test_sequential_calls_double_first() {
        let provider = Recording::default();
        invoke(&provider, 4, Mode::Sequential);
        assert_eq!(
            *provider.calls.lock().unwrap(),
            vec!["double_input", "third_input"]
        );
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let provider = Recording::default();
        for x in [i32::MIN, -1, 0, 4, 1_000_000, i32::MAX] {
            assert_eq!(
                invoke(&provider, x, Mode::Parallel),
                invoke(&LinkedProvider, x, Mode::Sequential)
            );
        }
        // each parallel run still calls both functions exactly once
        assert_eq!(provider.calls.lock().unwrap().len(), 12);
    }

    #[test]
    fn test_invoke_through_trait_object() {
        let provider: Box<dyn Provider> = Box::new(LinkedProvider);
        let invocation = invoke(provider.as_ref(), 7, Mode::Parallel);
        assert_eq!(invocation.doubled, 14);
        assert_eq!(invocation.tripled, 21);
    }
}
