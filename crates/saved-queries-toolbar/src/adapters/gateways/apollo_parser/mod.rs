mod oracle;

pub use oracle::ApolloParser;
