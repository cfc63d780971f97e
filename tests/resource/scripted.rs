#![allow(dead_code)]

use silo::{
    Error, Executor, Result, Row, RowLabeled, RowNames, Statement,
    stream::{self, Stream},
};
use std::{collections::VecDeque, future::Future};

/// Gateway double: records every statement it receives and hands back
/// scripted results in order. Keys for `last_inserted_key` are scripted
/// separately so tests can assert the accessor was (or was not) consulted.
#[derive(Default)]
pub struct ScriptedExecutor {
    pub statements: Vec<Statement>,
    pub results: VecDeque<ScriptedResult>,
    pub keys: VecDeque<i64>,
}

pub enum ScriptedResult {
    Affected(u64),
    Rows(RowNames, Vec<Row>),
    Failure(String),
}

impl ScriptedExecutor {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn push_affected(&mut self, count: u64) {
        self.results.push_back(ScriptedResult::Affected(count));
    }
    pub fn push_rows(&mut self, labels: &[&str], rows: Vec<Row>) {
        let labels: RowNames = labels.iter().map(|v| v.to_string()).collect();
        self.results.push_back(ScriptedResult::Rows(labels, rows));
    }
    pub fn push_failure(&mut self, message: &str) {
        self.results.push_back(ScriptedResult::Failure(message.into()));
    }
    pub fn push_key(&mut self, key: i64) {
        self.keys.push_back(key);
    }
}

impl Executor for ScriptedExecutor {
    fn execute(&mut self, statement: Statement) -> impl Future<Output = Result<u64>> + Send {
        self.statements.push(statement);
        let next = self.results.pop_front();
        async move {
            match next {
                Some(ScriptedResult::Affected(count)) => Ok(count),
                Some(ScriptedResult::Failure(message)) => Err(Error::StorageFailure(message)),
                Some(ScriptedResult::Rows(..)) => Err(Error::StorageFailure(
                    "scripted a row result for an execute call".into(),
                )),
                None => Ok(0),
            }
        }
    }

    fn query(&mut self, statement: Statement) -> impl Stream<Item = Result<RowLabeled>> + Send {
        self.statements.push(statement);
        let items: Vec<Result<RowLabeled>> = match self.results.pop_front() {
            Some(ScriptedResult::Rows(labels, rows)) => rows
                .into_iter()
                .map(|values| Ok(RowLabeled::new(labels.clone(), values)))
                .collect(),
            Some(ScriptedResult::Failure(message)) => {
                vec![Err(Error::StorageFailure(message))]
            }
            Some(ScriptedResult::Affected(..)) | None => Vec::new(),
        };
        stream::iter(items)
    }

    fn last_inserted_key(&mut self) -> impl Future<Output = Result<i64>> + Send {
        let key = self.keys.pop_front();
        async move {
            key.ok_or_else(|| Error::StorageFailure("no generated key available".into()))
        }
    }
}
