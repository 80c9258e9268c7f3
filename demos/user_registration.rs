//! Demonstrates a user registration handler assembled from brook pieces
//!
//! Run with: cargo run --example user_registration --features tracing,async

use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use brook::compose::memo;
use brook::{pipe, AsyncEffect, ImpureAsyncEffect, Outcome, SyncEffect};

#[derive(Debug, Clone)]
struct SignupRequest {
    username: String,
    email: String,
    password: String,
}

#[derive(Debug, Clone)]
struct CreateUserArgs {
    username: String,
    email: String,
    password: String,
}

#[derive(Debug, Clone)]
struct User {
    id: usize,
    username: String,
    email: String,
}

#[derive(Debug, Clone)]
enum RegistrationError {
    Invalid(Vec<String>),
    Hash(String),
    Storage(String),
    Timeout(String),
}

#[derive(Debug, Default)]
struct InMemoryUsers {
    rows: Mutex<Vec<(User, String)>>,
}

impl InMemoryUsers {
    fn insert(&self, args: CreateUserArgs) -> Result<User, RegistrationError> {
        let mut rows = self
            .rows
            .lock()
            .map_err(|_| RegistrationError::Storage("users table poisoned".to_string()))?;
        if rows.iter().any(|(user, _)| user.email == args.email) {
            return Err(RegistrationError::Storage(format!(
                "{} is already registered",
                args.email
            )));
        }
        let user = User {
            id: rows.len() + 1,
            username: args.username,
            email: args.email,
        };
        rows.push((user.clone(), args.password));
        Ok(user)
    }

    fn id_of(&self, email: &str) -> Option<usize> {
        self.rows
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .find(|(u, _)| u.email == email)
            .map(|(u, _)| u.id)
    }
}

fn validate(request: SignupRequest) -> Outcome<RegistrationError, CreateUserArgs> {
    let mut errors = Vec::new();
    if request.username.trim().is_empty() {
        errors.push("username is required".to_string());
    }
    if !request.email.contains('@') {
        errors.push("email must contain @".to_string());
    }
    if request.password.len() < 8 {
        errors.push("password must be at least 8 characters".to_string());
    }

    if errors.is_empty() {
        Outcome::pure(CreateUserArgs {
            username: request.username,
            email: request.email,
            password: request.password,
        })
    } else {
        Outcome::pure_failure(RegistrationError::Invalid(errors))
    }
}

fn hash_password(args: CreateUserArgs) -> AsyncEffect<Outcome<RegistrationError, CreateUserArgs>> {
    let span = tracing::debug_span!("hash_password", user = %args.username);
    AsyncEffect::pure(move || {
        let args = args.clone();
        async move {
            tokio::time::sleep(Duration::from_millis(5)).await;
            if args.password.contains('\0') {
                tracing::warn!("rejecting password with NUL byte");
                return Outcome::pure_failure(RegistrationError::Hash(
                    "password contains a NUL byte".to_string(),
                ));
            }
            let password = format!("$demo${}", args.password.len());
            Outcome::pure(CreateUserArgs { password, ..args })
        }
    })
    .instrument(span)
    .with_timeout(Duration::from_millis(200))
    .map(|timed| {
        timed
            .map_failure(|e| RegistrationError::Timeout(e.to_string()))
            .flatten()
    })
}

fn create_user(
    users: Arc<InMemoryUsers>,
) -> impl Fn(CreateUserArgs) -> ImpureAsyncEffect<Outcome<RegistrationError, User>> + Send + Sync {
    move |args| {
        let users = Arc::clone(&users);
        let span = tracing::info_span!("create_user", email = %args.email);
        ImpureAsyncEffect::attempt(move || {
            let users = Arc::clone(&users);
            let args = args.clone();
            async move { users.insert(args) }
        })
        .instrument(span)
    }
}

fn handler(
    users: Arc<InMemoryUsers>,
) -> impl Fn(SignupRequest) -> ImpureAsyncEffect<(u16, String)> {
    pipe!(
        |request: SignupRequest| {
            ImpureAsyncEffect::lift(SyncEffect::of(
                Outcome::<RegistrationError, SignupRequest>::pure(request),
            ))
        },
        |effect: ImpureAsyncEffect<Outcome<RegistrationError, SignupRequest>>| {
            effect.try_map_success(validate)
        },
        |effect: ImpureAsyncEffect<Outcome<RegistrationError, CreateUserArgs>>| {
            effect.bind_success(hash_password)
        },
        move |effect: ImpureAsyncEffect<Outcome<RegistrationError, CreateUserArgs>>| {
            effect.bind_success(create_user(Arc::clone(&users)))
        },
        |effect: ImpureAsyncEffect<Outcome<RegistrationError, User>>| {
            effect.fold_outcome(respond_with_error, |user| {
                (201, format!("created {} ({}) as #{}", user.username, user.email, user.id))
            })
        },
    )
}

fn respond_with_error(error: RegistrationError) -> (u16, String) {
    match error {
        RegistrationError::Invalid(errors) => (400, errors.join("; ")),
        RegistrationError::Hash(reason) => (422, reason),
        RegistrationError::Storage(reason) => (409, reason),
        RegistrationError::Timeout(reason) => (504, reason),
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let users = Arc::new(InMemoryUsers::default());
    let register = handler(Arc::clone(&users));

    let requests = vec![
        SignupRequest {
            username: "ada".to_string(),
            email: "ada@example.com".to_string(),
            password: "analytical engine".to_string(),
        },
        SignupRequest {
            username: "ada".to_string(),
            email: "ada@example.com".to_string(),
            password: "analytical engine".to_string(),
        },
        SignupRequest {
            username: "".to_string(),
            email: "nobody".to_string(),
            password: "short".to_string(),
        },
        SignupRequest {
            username: "grace".to_string(),
            email: "grace@example.com".to_string(),
            password: "cobol\0compiler".to_string(),
        },
    ];

    for request in requests {
        let (status, body) = register(request).run().await;
        tracing::info!(status, %body, "handled signup");
    }

    // Memoized lookups only hit the table once per email.
    let lookups = Arc::clone(&users);
    let user_id = memo(move |email: String| {
        tracing::debug!(%email, "scanning users table");
        lookups.id_of(&email)
    });
    for _ in 0..3 {
        tracing::info!(id = ?user_id("ada@example.com".to_string()), "lookup");
    }
}
