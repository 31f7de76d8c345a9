//! Fixed catalog of generated file contents.
//!
//! Only two entries are parameterized: the HTML shell title and the base
//! README heading, both from the project name. Everything else is a literal.

/// Tailwind config restricted to the project's own markup and scripts.
pub const TAILWIND_CONFIG: &str = r#"/** @type {import('tailwindcss').Config} */
export default {
  content: [
    "./index.html",
    "./src/**/*.{js,ts,jsx,tsx}",
  ],
  theme: {
    extend: {
      colors: {

      },
      fontFamily: {
        roboto: ['Roboto', 'sans-serif'],
        ropa: ['Ropa Sans', 'sans-serif'],
      },
    },
  },
  plugins: [],
}
"#;

/// Vite config with the dev-server port pinned.
pub const VITE_CONFIG: &str = r#"import { defineConfig } from 'vite'
import react from '@vitejs/plugin-react'

// https://vitejs.dev/config/
export default defineConfig({
  plugins: [react()],
  server: {
    port: 3000,
  }
})
"#;

/// Base-variant root component: an empty fragment to build on.
pub const APP_JSX: &str = r#"function App() {
  return (
    <>
      App Here
    </>
  )
}

export default App
"#;

/// Full-variant root component: router with an index route and a
/// wildcard catch-all, wrapped in the shared layout.
pub const FULL_APP_JSX: &str = r#"import { BrowserRouter, Routes, Route } from 'react-router-dom'
import MainLayout from './layouts/MainLayout.jsx'
import Home from './pages/Home.jsx'
import NotFound from './pages/NotFound.jsx'

function App() {
  return (
    <BrowserRouter>
      <MainLayout>
        <Routes>
          <Route index element={<Home />} />
          <Route path="*" element={<NotFound />} />
        </Routes>
      </MainLayout>
    </BrowserRouter>
  )
}

export default App
"#;

pub const INDEX_CSS: &str = "@tailwind base;\n@tailwind components;\n@tailwind utilities;\n";

pub const STORE_JS: &str = r#"import { configureStore } from '@reduxjs/toolkit';

const store = configureStore({
    reducer: {

    },
});

export default store;
"#;

pub const MAIN_JSX: &str = r#"import { createRoot } from 'react-dom/client'
import { Provider } from 'react-redux'
import { StrictMode } from 'react'
import store from './store.js'
import App from './App.jsx'
import './index.css'

createRoot(document.getElementById('root')).render(
  <StrictMode>
    <Provider store={store}>
      <App />
    </Provider>
  </StrictMode>
)
"#;

pub const HOME_JSX: &str = r#"function Home() {
  return (
    <div className="p-4 font-roboto">
      Home Page
    </div>
  )
}

export default Home
"#;

pub const NOT_FOUND_JSX: &str = r#"function NotFound() {
  return (
    <div className="p-4 font-roboto">
      404 - Page Not Found
    </div>
  )
}

export default NotFound
"#;

pub const MAIN_LAYOUT_JSX: &str = r#"import Navbar from '../components/Navbar.jsx'
import Footer from '../components/Footer.jsx'

function MainLayout({ children }) {
  return (
    <div className="flex min-h-screen flex-col">
      <Navbar />
      <main className="flex-1">{children}</main>
      <Footer />
    </div>
  )
}

export default MainLayout
"#;

pub const NAVBAR_JSX: &str = r#"function Navbar() {
  return (
    <nav className="flex items-center justify-between p-4 shadow">
      <span className="font-ropa text-xl">Navbar</span>
    </nav>
  )
}

export default Navbar
"#;

pub const FOOTER_JSX: &str = r#"function Footer() {
  return (
    <footer className="p-4 text-center text-sm">
      Footer
    </footer>
  )
}

export default Footer
"#;

/// Full-variant README heading is a fixed placeholder, unlike the base
/// variant which interpolates the project name. The mismatch is kept
/// as-is; see DESIGN.md.
pub const FULL_README: &str = "# React App\n";

/// HTML shell with the page title derived from the project name,
/// hyphens rendered as spaces.
pub fn index_html(project_name: &str) -> String {
    let title = project_name.replace('-', " ");
    format!(
        r#"<!doctype html>
<html lang="en">
  <head>
    <meta charset="UTF-8" />
    <link rel="icon" type="image/svg+xml" href="/vite.svg" />
    <meta name="viewport" content="width=device-width, initial-scale=1.0" />
    <link href="https://fonts.googleapis.com/css2?family=Roboto:wght@400;700&family=Ropa+Sans&display=swap" rel="stylesheet">
    <title>{title}</title>
  </head>
  <body>
    <div id="root"></div>
    <script type="module" src="/src/main.jsx"></script>
  </body>
</html>
"#
    )
}

/// Base-variant README: a single heading with the project name.
pub fn readme(project_name: &str) -> String {
    format!("# {project_name}\n")
}
