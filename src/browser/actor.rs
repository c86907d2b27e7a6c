use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::framework::{get_resource, send_data, Method, Transport};
use crate::handlers::{self, Payload, Submission};
use crate::renderers::{self, FollowUp, RenderContext};
use crate::routes::{Route, RouteTable};
use crate::view::{Form, Page};

use super::client::BrowserClient;
use super::error::BrowserError;
use super::message::{BrowserRequest, Completion, Outcome, Reply, Response};

/// The actor that owns the page.
///
/// # Architecture Note
/// This is the "Server" half of the browser. It owns the [`Page`], the route
/// table and the generation counter, and processes messages one at a time, so
/// none of them need a lock.
///
/// Network exchanges never block the loop. Each one runs in its own task and
/// reports back on an internal completion channel, tagged with the generation
/// that was current when it started. Every navigation bumps the generation;
/// a completion carrying an older one is dropped without touching the page.
///
/// `page_generation` is the navigation that drew the page on screen. Forms are
/// submitted from that page, so a send is tagged with it and its result is
/// applied only while that page is still shown and no other navigation has
/// started since.
pub struct BrowserActor {
    receiver: mpsc::Receiver<BrowserRequest>,
    completions: mpsc::UnboundedReceiver<Completion>,
    completion_sender: mpsc::UnboundedSender<Completion>,
    api_root: String,
    routes: RouteTable,
    page: Page,
    generation: u64,
    page_generation: u64,
}

impl BrowserActor {
    pub fn new(buffer_size: usize, api_root: impl Into<String>, routes: RouteTable) -> (Self, BrowserClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let (completion_sender, completions) = mpsc::unbounded_channel();
        let actor = Self {
            receiver,
            completions,
            completion_sender,
            api_root: api_root.into(),
            routes,
            page: Page::default(),
            generation: 0,
            page_generation: 0,
        };
        (actor, BrowserClient::new(sender))
    }

    /// Runs the event loop until every client handle is dropped.
    ///
    /// The transport is injected here rather than in [`new`](Self::new), the
    /// same late binding the lifecycle uses for everything the loop talks to.
    pub async fn run(mut self, transport: Arc<dyn Transport>) {
        info!(api_root = %self.api_root, "Browser started");

        loop {
            tokio::select! {
                request = self.receiver.recv() => {
                    let Some(request) = request else { break };
                    self.handle_request(request, &transport);
                }
                Some(completion) = self.completions.recv() => {
                    self.handle_completion(completion, &transport);
                }
            }
        }

        info!(generation = self.generation, "Shutdown");
    }

    fn handle_request(&mut self, request: BrowserRequest, transport: &Arc<dyn Transport>) {
        match request {
            BrowserRequest::Open { href, route, respond_to } => {
                self.navigate(transport, FollowUp { href, route }, respond_to);
            }
            BrowserRequest::Fill { name, value, respond_to } => {
                let result = match self.page.form.as_mut() {
                    None => Err(BrowserError::NoForm),
                    Some(form) => {
                        if form.set_value(&name, value) {
                            Ok(())
                        } else {
                            Err(BrowserError::NoSuchField(name))
                        }
                    }
                };
                let _ = respond_to.send(result);
            }
            BrowserRequest::Submit { respond_to } => self.submit(transport, respond_to),
            BrowserRequest::Snapshot { respond_to } => {
                let _ = respond_to.send(Ok(self.page.clone()));
            }
        }
    }

    /// Starts a new navigation. Anything still in flight becomes stale.
    fn navigate(&mut self, transport: &Arc<dyn Transport>, target: FollowUp, respond_to: Response<Outcome>) {
        self.generation += 1;
        info!(generation = self.generation, href = %target.href, route = %target.route, "Navigate");
        let reply = Reply::new(respond_to, Outcome::Rendered(target.route));
        self.spawn_fetch(transport, target, Some(reply));
    }

    fn submit(&mut self, transport: &Arc<dyn Transport>, respond_to: Response<Outcome>) {
        let Some(form) = self.page.form.clone() else {
            let _ = respond_to.send(Err(BrowserError::NoForm));
            return;
        };

        match handlers::prepare(&form) {
            Submission::Blocked { field } => {
                info!(%field, "Required field is empty");
                let _ = respond_to.send(Ok(Outcome::Blocked { field }));
            }
            Submission::Navigate(target) => self.navigate(transport, target, respond_to),
            Submission::NotWired(payload) => {
                warn!(?payload, "User submission is not sent to the API");
                let _ = respond_to.send(Ok(Outcome::NotWired));
            }
            Submission::Send { href, method, payload } => {
                self.spawn_send(transport, form, href, method, payload, respond_to);
            }
        }
    }

    fn spawn_fetch(&self, transport: &Arc<dyn Transport>, target: FollowUp, reply: Option<Reply>) {
        let transport = Arc::clone(transport);
        let done = self.completion_sender.clone();
        let generation = self.generation;
        tokio::spawn(async move {
            let FollowUp { href, route } = target;
            let result = get_resource(transport.as_ref(), &href).await;
            let _ = done.send(Completion::Fetched {
                generation,
                href,
                route,
                result,
                reply,
            });
        });
    }

    /// Sends a payload on behalf of the page on screen. Submitting does not
    /// start a new navigation; the response is applied only if the user has
    /// not navigated away, or started to, in the meantime.
    fn spawn_send(
        &self,
        transport: &Arc<dyn Transport>,
        form: Form,
        href: String,
        method: Method,
        payload: Payload,
        respond_to: Response<Outcome>,
    ) {
        let transport = Arc::clone(transport);
        let done = self.completion_sender.clone();
        let generation = self.page_generation;
        debug!(generation, %href, %method, "Submitting");
        tokio::spawn(async move {
            let result = send_data(transport.as_ref(), &href, method, &payload).await;
            let _ = done.send(Completion::Sent {
                generation,
                form,
                result,
                respond_to,
            });
        });
    }

    fn handle_completion(&mut self, completion: Completion, transport: &Arc<dyn Transport>) {
        match completion {
            Completion::Fetched {
                generation,
                href,
                route,
                result,
                reply,
            } => {
                if generation != self.generation {
                    warn!(generation, current = self.generation, %href, "Dropping stale response");
                    if let Some(reply) = reply {
                        reply.finish(Outcome::Stale);
                    }
                    return;
                }

                let body = match result {
                    Ok(body) => body,
                    Err(e) => {
                        self.adopt_failed_navigation(route);
                        self.fail(e.notification(), reply.map(|r| r.respond_to));
                        return;
                    }
                };

                let ctx = RenderContext::new(&self.api_root, &self.routes);
                match renderers::render(route, &body, &ctx, &mut self.page) {
                    Ok(follow_ups) => {
                        if route.is_full_page() {
                            self.page_generation = generation;
                        }
                        info!(%route, %href, "Rendered");
                        self.follow(transport, follow_ups, reply);
                    }
                    Err(e) => {
                        warn!(%route, %href, error = %e, "Render failed");
                        self.adopt_failed_navigation(route);
                        self.fail(e.to_string(), reply.map(|r| r.respond_to));
                    }
                }
            }
            Completion::Sent {
                generation,
                form,
                result,
                respond_to,
            } => {
                if generation != self.generation || generation != self.page_generation {
                    warn!(
                        generation,
                        current = self.generation,
                        page = self.page_generation,
                        "Dropping stale submission result"
                    );
                    let _ = respond_to.send(Ok(Outcome::Stale));
                    return;
                }

                let response = match result {
                    Ok(response) => response,
                    Err(e) => {
                        self.fail(e.notification(), Some(respond_to));
                        return;
                    }
                };

                info!(handler = ?form.handler, status = response.status, "Submitted");
                let outcome = Outcome::Submitted {
                    location: response.location().map(str::to_string),
                };
                match handlers::after_submit(form.handler, &response, &form, &mut self.page) {
                    Some(target) => {
                        self.spawn_fetch(transport, target, Some(Reply::new(respond_to, outcome)));
                    }
                    None => {
                        let _ = respond_to.send(Ok(outcome));
                    }
                }
            }
        }
    }

    /// Fetches whatever a renderer asked for. The caller is answered once the
    /// last follow-up is drawn, or right away when there are none.
    fn follow(&self, transport: &Arc<dyn Transport>, mut follow_ups: Vec<FollowUp>, reply: Option<Reply>) {
        let Some(last) = follow_ups.pop() else {
            if let Some(reply) = reply {
                reply.succeed();
            }
            return;
        };
        for target in follow_ups {
            self.spawn_fetch(transport, target, None);
        }
        self.spawn_fetch(transport, last, reply);
    }

    /// A full-page navigation that failed leaves the previous page on screen;
    /// that page now belongs to the latest navigation, so its forms stay usable.
    fn adopt_failed_navigation(&mut self, route: Route) {
        if route.is_full_page() {
            self.page_generation = self.generation;
        }
    }

    /// Shows a failure in the notification region; the rest of the page stays.
    fn fail(&mut self, text: String, respond_to: Option<Response<Outcome>>) {
        self.page.show_error(text.as_str());
        if let Some(respond_to) = respond_to {
            let _ = respond_to.send(Ok(Outcome::Failed(text)));
        }
    }
}
