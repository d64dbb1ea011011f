pub mod day_aggregator;
