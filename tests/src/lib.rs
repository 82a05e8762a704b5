//! End-to-end checks of both discovery pipelines against in-memory services.

mod pipelines;
