
mod cli_tests;
mod launcher_tests;
mod recipient_tests;
