/// Screens reachable from the bottom bar.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Route {
    Draw,
    Settings,
}

impl Route {
    pub const ALL: [Route; 2] = [Route::Draw, Route::Settings];

    pub fn path(self) -> &'static str {
        match self {
            Route::Draw => "draw",
            Route::Settings => "settings",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Route::Draw => "Draw",
            Route::Settings => "Settings",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Route::Draw => "✏",
            Route::Settings => "⚙",
        }
    }
}

/// Back stack of visited routes. Each route appears at most once.
#[derive(Debug)]
pub struct Navigator {
    stack: Vec<Route>,
}

impl Navigator {
    pub fn new(start: Route) -> Self {
        Self { stack: vec![start] }
    }

    pub fn current(&self) -> Route {
        self.stack.last().copied().unwrap_or(Route::Draw)
    }

    /// Bring `route` to the top. Returns `false` if it was already current.
    ///
    /// A route visited before is moved rather than pushed again, so its screen
    /// comes back with whatever egui remembered for it.
    pub fn navigate(&mut self, route: Route) -> bool {
        if self.current() == route {
            return false;
        }
        self.stack.retain(|r| *r != route);
        self.stack.push(route);
        log::debug!("Navigated to {}", route.path());
        true
    }

    /// Pop the current route. The last remaining route is never popped.
    pub fn back(&mut self) -> bool {
        if self.stack.len() <= 1 {
            return false;
        }
        self.stack.pop();
        log::debug!("Back to {}", self.current().path());
        true
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new(Route::Draw)
    }
}
