#![allow(dead_code)]

use std::fs;
use std::path::Path;

pub fn write_file(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

pub const ROOT_README: &str = "\
# Todo App

A full-stack todo application with a React front end and an Express backend.

## Features

- ✅ Create todos
- ✅ Update todos
- ✅ Delete todos

## Tech Stack

- React 19
- Express.js
- PostgreSQL 16

## Prerequisites

- Node.js (v18 or later)
- PostgreSQL 16

## Quick Start

### Database

```bash
psql -c \"CREATE DATABASE todo_db;\"
```

### Backend

```bash
cd backend
npm install
npm run dev   # http://localhost:3001
```

### Frontend

```bash
cd frontend
npm install
npm run dev   # http://localhost:5173
```

### Docker

```bash
docker compose up
```

## Environment Variables

```bash
DB_HOST=localhost
DATABASE_URL=postgres://localhost/todo_db
```

## API

| Method | Path |
|--------|------|
| GET | /api/todos |
| POST | /api/todos |
| PUT | /api/todos/:id |
| DELETE | /api/todos/:id |

## Data Types

```typescript
interface Todo {
  id: number;
  title: string;
  completed: boolean;
}
```

## Project Structure and Architecture

```
├── backend
├── frontend
└── database
```

## Testing

Run `npm test` in each package. We follow TDD: red, green, refactor.

## Troubleshooting

If the backend cannot connect, check that PostgreSQL is running.

## Deployment

Deploy the containers with the production compose file.

## CI/CD

GitHub Actions runs the test suite on every push.

## Security

Never commit .env files.

## Performance

Indexes on todos keep list queries fast.

## Contributing

Open a pull request against main.

## License

MIT

## Related Documents

- [Backend](./backend/README.md)
- [Frontend](./frontend/README.md)
- [Database](./database/README.md)
";

pub const SCHEMA: &str = "\
CREATE TABLE todos (
    id SERIAL PRIMARY KEY,
    title VARCHAR(200) NOT NULL,
    completed BOOLEAN DEFAULT false,
    created_at TIMESTAMP DEFAULT NOW()
);
";

pub const USERS_UP: &str = "\
CREATE TABLE users (
  id SERIAL PRIMARY KEY,
  username VARCHAR(50) NOT NULL UNIQUE,
  email VARCHAR(255) NOT NULL UNIQUE,
  created_at TIMESTAMP DEFAULT NOW()
);
";

pub const POSTS_UP: &str = "\
create table posts (
  id serial primary key,
  user_id integer not null,
  title varchar(200) not null,
  content text,
  created_at timestamp default now(),
  foreign key (user_id) references users(id)
);
";

pub const COMMENTS_UP: &str = "\
CREATE TABLE comments (
  id SERIAL PRIMARY KEY,
  post_id INTEGER NOT NULL REFERENCES posts(id),
  user_id INTEGER NOT NULL REFERENCES users(id),
  content TEXT NOT NULL,
  created_at TIMESTAMP DEFAULT NOW()
);
";

/// A project tree that satisfies every rule in the catalog.
pub fn conforming_project(root: &Path) {
    write_file(&root.join("README.md"), ROOT_README);

    write_file(&root.join("backend/README.md"), "# Backend\n");
    write_file(&root.join("backend/package.json"), "{}\n");
    write_file(&root.join("backend/server.js"), "require('express')();\n");
    write_file(&root.join("backend/.gitignore"), "node_modules\n");

    write_file(&root.join("frontend/README.md"), "# Frontend\n");
    write_file(&root.join("frontend/package.json"), "{}\n");
    write_file(&root.join("frontend/index.html"), "<div id=\"root\"></div>\n");
    write_file(&root.join("frontend/vite.config.js"), "export default {};\n");
    write_file(&root.join("frontend/.gitignore"), "dist\n");
    write_file(&root.join("frontend/src/main.tsx"), "export {};\n");

    write_file(&root.join("shared/README.md"), "# Shared types\n");

    write_file(&root.join("docker/docker-compose.yml"), "services: {}\n");
    write_file(&root.join("docker/Dockerfile"), "FROM node:18\n");
    write_file(&root.join("docker/README.md"), "# Docker\n");

    write_file(&root.join("database/schema.sql"), SCHEMA);
    write_file(
        &root.join("database/README.md"),
        "# Database\n\nPostgreSQL 16 database `todo_db` holding the `todos` table.\n",
    );

    let migrations = root.join("database/migrations");
    write_file(&migrations.join("001_create_users_table.up.sql"), USERS_UP);
    write_file(&migrations.join("001_create_users_table.down.sql"), "DROP TABLE IF EXISTS users;\n");
    write_file(&migrations.join("002_create_posts_table.up.sql"), POSTS_UP);
    write_file(&migrations.join("002_create_posts_table.down.sql"), "DROP TABLE IF EXISTS posts;\n");
    write_file(&migrations.join("003_create_comments_table.up.sql"), COMMENTS_UP);
    write_file(
        &migrations.join("003_create_comments_table.down.sql"),
        "DROP TABLE IF EXISTS comments;\n",
    );
    write_file(
        &migrations.join("README.md"),
        "# Migrations\n\nEach migration is applied (実行) in order against the database.\n",
    );
}
