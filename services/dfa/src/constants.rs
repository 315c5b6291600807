// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

// Headers used by the Digital for Airlines gateway.
pub const X_API_KEY: &str = "x-api-key";
pub const X_API_SIGNATURE: &str = "x-api-signature";

// Env values used by the Digital for Airlines gateway.
pub const DFA_API_KEY: &str = "DFA_API_KEY";
pub const DFA_API_SECRET: &str = "DFA_API_SECRET";
