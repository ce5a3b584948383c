// End-to-end tests for the OTP manager HTTP surface
//
// Each test starts the real router on an ephemeral port, backed by an
// in-process fake OTP engine whose behaviour is keyed on the request input.
// Tests run in parallel; no state is shared between servers.

mod test_failures;
