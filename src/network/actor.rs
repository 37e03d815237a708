//! Network actor - runs HTTP requests in the Tokio async runtime

use tokio::sync::mpsc;
use tokio::task::JoinSet;

use crate::messages::{NetworkCommand, NetworkResponse};
use crate::network::client::{create_client, execute_plan};

/// Network actor that executes dispatch commands on spawned tasks
pub struct NetworkActor {
    client: reqwest::Client,
    response_tx: mpsc::UnboundedSender<NetworkResponse>,
    in_flight: JoinSet<()>,
}

impl NetworkActor {
    pub fn new(response_tx: mpsc::UnboundedSender<NetworkResponse>) -> Self {
        NetworkActor {
            client: create_client(),
            response_tx,
            in_flight: JoinSet::new(),
        }
    }

    /// Run the network actor message loop
    pub async fn run(mut self, mut cmd_rx: mpsc::UnboundedReceiver<NetworkCommand>) {
        loop {
            tokio::select! {
                biased;

                cmd = cmd_rx.recv() => {
                    match cmd {
                        Some(NetworkCommand::Dispatch { id, plan }) => {
                            let response_tx = self.response_tx.clone();
                            let client = self.client.clone();

                            self.in_flight.spawn(async move {
                                tracing::info!(id, url = %plan.url, method = ?plan.method, "Dispatching request");
                                let result = execute_plan(&client, plan, id).await;
                                tracing::info!(id, "Request finished");
                                let _ = response_tx.send(result);
                            });
                        }

                        Some(NetworkCommand::Shutdown) | None => break,
                    }
                }

                // Reap finished tasks; requests run to completion, there
                // is no cancellation path
                Some(_result) = self.in_flight.join_next() => {}
            }
        }
    }
}
