// exaroton API endpoint groups
//
// Each file adds inherent methods to `ExarotonClient` for one area of the
// API. All of them go through `ExarotonClient::request`, so content-type
// dispatch and error mapping behave identically everywhere.

mod account;
mod billing;
mod files;
mod players;
mod servers;
