//! Acquire a few connections through a custom driver, then close them all,
//! reporting every close failure as one aggregate.
//!
//! Run with:
//!
//! ```bash
//! cargo run -p dbpool-factory --example batch_close
//! ```

use std::sync::Arc;

use dbpool_factory::{
    Connection, ConnectionFactory, Driver, DriverConnectionFactory, DriverError, DriverErrorList,
    Properties,
};

/// A toy driver whose connections live entirely in memory.
struct InMemoryDriver;

#[derive(Debug)]
struct InMemoryConnection {
    closed: bool,
}

impl Connection for InMemoryConnection {
    fn close(&mut self) -> Result<(), DriverError> {
        if self.closed {
            return Err(DriverError::Closed);
        }
        self.closed = true;
        Ok(())
    }

    fn is_valid(&self) -> bool {
        !self.closed
    }
}

impl Driver for InMemoryDriver {
    fn connect(
        &self,
        url: &str,
        _properties: &Properties,
    ) -> Result<Box<dyn Connection>, DriverError> {
        if !url.starts_with("mem:") {
            return Err(DriverError::MalformedUrl(url.to_owned()));
        }
        Ok(Box::new(InMemoryConnection { closed: false }))
    }

    fn accepts_url(&self, url: &str) -> bool {
        url.starts_with("mem:")
    }
}

fn main() -> Result<(), DriverError> {
    let mut props = Properties::new();
    props.set("application_name", "batch-close-demo");

    let factory = DriverConnectionFactory::new(Arc::new(InMemoryDriver), "mem:demo", props)
        .user("demo_user");

    println!("factory: {factory}");

    let mut connections = Vec::new();
    for _ in 0..3 {
        connections.push(factory.create_connection()?);
    }
    println!("acquired {} connections", connections.len());

    // Close one connection early so the shutdown sweep below sees a failure.
    connections[0].close()?;

    // Shutdown sweep: attempt every close, keep every failure, raise once.
    let mut failures = Vec::new();
    for conn in &mut connections {
        if let Err(err) = conn.close() {
            failures.push(err);
        }
    }

    let aggregate: DriverErrorList = failures.into_iter().collect();
    match aggregate.cause_list() {
        Some([]) => println!("all connections closed cleanly"),
        Some(causes) => {
            println!("shutdown finished with {aggregate}");
            for (i, cause) in causes.iter().enumerate() {
                println!("  [{i}] {cause}");
            }
        }
        None => unreachable!("collect always records a cause list"),
    }

    Ok(())
}
