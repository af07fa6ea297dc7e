pub mod token_denylist;
