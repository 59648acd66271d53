mod message_tests;
mod prune_tests;
mod topics_tests;
