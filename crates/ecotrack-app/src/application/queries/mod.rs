mod footprint_queries;

pub use footprint_queries::FootprintQueryService;
