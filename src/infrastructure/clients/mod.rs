pub(crate) mod push_feed;
