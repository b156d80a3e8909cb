
#[cfg(test)]
mod login_tests;

#[cfg(test)]
mod session_flow_tests;

#[cfg(test)]
mod stats_tests;
