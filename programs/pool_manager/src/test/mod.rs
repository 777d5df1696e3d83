pub mod test_ledger;
